// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `nofork` runner: calls the test entry point directly,
//! in-process. Simplest and cheapest, at the cost of isolation — a crash
//! or a hang in the test takes the whole harness down with it.

use crate::argv::CArgs;
use crate::clock;
use crate::config::EngineConfig;
use crate::registry::TestCase;
use crate::verdict::Termination;

pub fn run(cfg: &EngineConfig, test: &TestCase, tail: &[String]) -> Termination {
    let program = cfg.program.to_string_lossy().into_owned();
    let args = CArgs::build(&program, tail);
    let (argc, argv) = args.as_raw();

    let start = clock::mark();
    // SAFETY: `test.entry` was resolved from a symbol matching the
    // `int(int, char **)` test-entry ABI; `argv` is
    // null-terminated and owned by `args` for the duration of this call.
    let code = unsafe { (test.entry)(argc, argv) };
    let elapsed_ms = start.elapsed_ms();

    Termination::from_exit_code(code, elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, TestOutput};
    use std::os::raw::{c_char, c_int};
    use std::path::PathBuf;

    unsafe extern "C" fn returns_seven(_argc: c_int, _argv: *const *const c_char) -> c_int {
        7
    }

    fn cfg() -> EngineConfig {
        EngineConfig {
            program: PathBuf::from("testfw"),
            timeout_s: 0,
            log_sink: None,
            silent: false,
            mode: Mode::NoFork,
            test_output: TestOutput::Inherit,
            verbose: false,
        }
    }

    #[test]
    fn propagates_the_entry_points_return_code() {
        let test = TestCase {
            suite: "s".into(),
            name: "seven".into(),
            entry: returns_seven,
        };
        let t = run(&cfg(), &test, &[]);
        assert_eq!(t.classify(), crate::verdict::Verdict::Failure(7));
    }
}
