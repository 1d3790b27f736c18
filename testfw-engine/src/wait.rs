// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decodes the `wait(2)` status word. Reimplemented by hand (rather than
//! relying on libc's optional `WIFEXITED`-style helpers, which aren't
//! uniformly available across the unix targets this crate might build
//! for) following the layout documented in `man 2 wait`: the low 7 bits
//! carry the terminating signal (0 means "exited normally"), the next bit
//! is the core-dump flag, and for a normal exit the next byte up holds
//! the exit code.

/// True if the process exited normally (as opposed to being signaled).
pub fn exited(status: i32) -> bool {
    (status & 0x7f) == 0
}

/// The exit code of a normally-exited process. Only meaningful if
/// [`exited`] is true.
pub fn exit_status(status: i32) -> i32 {
    (status >> 8) & 0xff
}

/// True if the process was terminated by a signal.
pub fn signaled(status: i32) -> bool {
    let low7 = status & 0x7f;
    low7 != 0 && low7 != 0x7f
}

/// The signal that terminated the process. Only meaningful if
/// [`signaled`] is true.
pub fn term_sig(status: i32) -> i32 {
    status & 0x7f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_normal_exit() {
        let status = 0 << 8; // exit code 0
        assert!(exited(status));
        assert!(!signaled(status));
        assert_eq!(exit_status(status), 0);

        let status = 124 << 8;
        assert!(exited(status));
        assert_eq!(exit_status(status), 124);
    }

    #[test]
    fn decodes_signaled_termination() {
        let status = libc::SIGSEGV; // low 7 bits carry the signal number
        assert!(signaled(status));
        assert!(!exited(status));
        assert_eq!(term_sig(status), libc::SIGSEGV);
    }
}
