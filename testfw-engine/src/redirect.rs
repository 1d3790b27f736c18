// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Redirects a forked worker's stdout/stderr. Never parsed, only ever
//! pointed somewhere else or inherited.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::config::TestOutput;

/// Applies the configured redirection in the *current* process. Must be
/// called in a forked child, after `fork` and before the test entry
/// point runs; uses only async-signal-safe raw syscalls.
pub fn apply(output: &TestOutput) {
    match output {
        TestOutput::Inherit => {}
        TestOutput::Null => redirect_to(Path::new("/dev/null")),
        TestOutput::File(path) => redirect_to(path),
    }
}

fn redirect_to(path: &Path) {
    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return;
    };
    unsafe {
        let fd = libc::open(
            cpath.as_ptr(),
            libc::O_WRONLY | libc::O_CREAT | libc::O_APPEND,
            0o644,
        );
        if fd >= 0 {
            libc::dup2(fd, libc::STDOUT_FILENO);
            libc::dup2(fd, libc::STDERR_FILENO);
            libc::close(fd);
        }
        // If `open` failed, leave stdio inherited rather than abort the
        // worker over a logging concern.
    }
}
