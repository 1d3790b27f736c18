// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Renders a [`Termination`] into a single verdict line, to any
//! `Write` sink.

use std::ffi::CStr;
use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::registry::TestCase;
use crate::verdict::{Termination, Verdict};

/// Whether a sink should receive ANSI color codes. The CLI decides this
/// once (stdout + is a terminal => colored; a log file => never) and
/// passes it down, rather than having the formatter probe the sink
/// itself — keeps this module testable against a plain `Vec<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}

fn signal_name(sig: i32) -> String {
    // SAFETY: `strsignal` returns a pointer to a statically-allocated
    // string (or to a static "Unknown signal" buffer); valid for the
    // lifetime of the call and does not need freeing.
    let ptr = unsafe { libc::strsignal(sig) };
    if ptr.is_null() {
        return format!("signal {sig}");
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}

/// Writes one verdict line for `test`/`termination` to `sink`.
///
/// Format: `[<VERDICT>] run test "<suite>.<name>" in <ms> ms (<detail>)`
pub fn write_verdict(
    sink: &mut dyn Write,
    test: &TestCase,
    termination: &Termination,
    color: ColorMode,
) -> io::Result<()> {
    let verdict = termination.classify();
    let (label, detail) = match verdict {
        Verdict::Success => ("SUCCESS", "status 0".to_string()),
        Verdict::Timeout => ("TIMEOUT", format!("status {}", crate::verdict::TIMEOUT_CODE)),
        Verdict::Failure(code) => ("FAILURE", format!("status {code}")),
        Verdict::Killed(sig) => ("KILLED", format!("signal \"{}\"", signal_name(sig))),
    };

    let tag = match color {
        ColorMode::Always if verdict.is_success() => format!("[{label}]").color(Color::Green).to_string(),
        ColorMode::Always => format!("[{label}]").color(Color::Red).to_string(),
        ColorMode::Never => format!("[{label}]"),
    };

    writeln!(
        sink,
        "{} run test \"{}\" in {} ms ({})",
        tag,
        test.id(),
        termination.elapsed_ms,
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::{c_char, c_int};

    unsafe extern "C" fn stub(_argc: c_int, _argv: *const *const c_char) -> c_int {
        0
    }

    fn test_case() -> TestCase {
        TestCase {
            suite: "test".into(),
            name: "success".into(),
            entry: stub,
        }
    }

    #[test]
    fn renders_success_line_uncolored() {
        let mut buf = Vec::new();
        let t = Termination::from_exit_code(0, 12);
        write_verdict(&mut buf, &test_case(), &t, ColorMode::Never).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line, "[SUCCESS] run test \"test.success\" in 12 ms (status 0)\n");
    }

    #[test]
    fn renders_failure_line_with_code() {
        let mut buf = Vec::new();
        let t = Termination::from_exit_code(1, 3);
        write_verdict(&mut buf, &test_case(), &t, ColorMode::Never).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line, "[FAILURE] run test \"test.success\" in 3 ms (status 1)\n");
    }

    #[test]
    fn renders_killed_line_with_signal_name() {
        let mut buf = Vec::new();
        let t = Termination {
            raw_status: libc::SIGSEGV,
            elapsed_ms: 4,
        };
        write_verdict(&mut buf, &test_case(), &t, ColorMode::Never).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("[KILLED] run test \"test.success\" in 4 ms (signal \""));
    }
}
