// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Termination records and the verdict taxonomy derived from them.

use crate::wait;

/// Exit code the `forks`/`forkp` supervisor uses to signal a synthesized
/// timeout through the ordinary wait channel. Matches
/// `examples/original_source/testfw.c`'s own `TESTFW_EXIT_TIMEOUT`
/// convention of a distinguished, GNU-`timeout`-style exit code.
pub const TIMEOUT_CODE: i32 = 124;

/// Signal the alarm process sends to a timing-out worker. Matches the
/// original framework's choice exactly.
pub const TIMEOUT_SIGNAL: i32 = libc::SIGUSR1;

/// The raw outcome of a supervised (or in-process) test run.
#[derive(Clone, Copy, Debug)]
pub struct Termination {
    /// Wait-status bits from the supervised child. In `nofork` mode there
    /// is no child; the entry's own return value is encoded the same way
    /// an `exited` status would be.
    pub raw_status: i32,
    pub elapsed_ms: u64,
}

/// The coarse taxonomy the Diagnostic Formatter renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure(i32),
    Timeout,
    Killed(i32),
}

impl Verdict {
    pub fn is_success(self) -> bool {
        matches!(self, Verdict::Success)
    }
}

impl Termination {
    /// Builds a termination record as if the entry point itself exited
    /// with `code` (used by the `nofork` runner, which has no real child
    /// to wait on).
    pub fn from_exit_code(code: i32, elapsed_ms: u64) -> Self {
        Termination {
            raw_status: (code & 0xff) << 8,
            elapsed_ms,
        }
    }

    /// Classifies this termination into one of the four verdicts.
    pub fn classify(&self) -> Verdict {
        if wait::exited(self.raw_status) {
            match wait::exit_status(self.raw_status) {
                0 => Verdict::Success,
                TIMEOUT_CODE => Verdict::Timeout,
                code => Verdict::Failure(code),
            }
        } else if wait::signaled(self.raw_status) {
            Verdict::Killed(wait::term_sig(self.raw_status))
        } else {
            // Can't happen for a status obtained from `waitpid` on a
            // terminated child, but an engine-internal fault
            // is a more honest response than a silent misclassification.
            Verdict::Failure(-1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_zero_is_success() {
        let t = Termination::from_exit_code(0, 5);
        assert_eq!(t.classify(), Verdict::Success);
    }

    #[test]
    fn nonzero_exit_is_failure_with_code() {
        let t = Termination::from_exit_code(7, 5);
        assert_eq!(t.classify(), Verdict::Failure(7));
    }

    #[test]
    fn timeout_code_is_timeout() {
        let t = Termination::from_exit_code(TIMEOUT_CODE, 2000);
        assert_eq!(t.classify(), Verdict::Timeout);
    }

    #[test]
    fn signal_termination_is_killed() {
        let t = Termination {
            raw_status: libc::SIGSEGV,
            elapsed_ms: 1,
        };
        assert_eq!(t.classify(), Verdict::Killed(libc::SIGSEGV));
    }
}
