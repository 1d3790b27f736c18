// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `forkp` runner: every registered test's supervisor
//! tree is launched as a sibling up front, then a single wait loop reaps
//! them in whatever order they actually finish. Left unimplemented in
//! `examples/original_source/testfw.c` (`run_test_forkp` is a stub that
//! always returns success); this is a from-scratch implementation of
//! the policy the original only stubbed out, reusing the same
//! supervisor/worker/alarm tree the `forks` runner builds per test.

use std::os::raw::c_int;

use crate::clock::{self, ClockMark};
use crate::config::EngineConfig;
use crate::registry::TestCase;
use crate::verdict::Termination;

use super::supervise;

/// Runs every test in `tests` concurrently and returns one
/// `(registry index, Termination)` pair per test, in completion order —
/// which need not match registration order.
pub fn run_suite(cfg: &EngineConfig, tests: &[TestCase], tail: &[String]) -> Vec<(usize, Termination)> {
    let mut pending: Vec<(libc::pid_t, usize, ClockMark)> = Vec::with_capacity(tests.len());

    for (idx, test) in tests.iter().enumerate() {
        let start = clock::mark();
        // SAFETY: the engine is single-threaded for its whole lifetime
        //; each supervisor tree is independent of the others.
        let pid = unsafe { supervise::spawn_supervisor(test, cfg, tail) };
        pending.push((pid, idx, start));
    }

    let mut results = Vec::with_capacity(tests.len());
    while !pending.is_empty() {
        let mut status: c_int = 0;
        // -1 waits for any child of this process; each pending entry is
        // a direct child (a supervisor), so this reaps the cohort in
        // whatever order they actually finish.
        let pid = unsafe { libc::waitpid(-1, &mut status, 0) };
        if pid < 0 {
            break; // ECHILD: nothing left to reap, shouldn't happen here
        }
        if let Some(pos) = pending.iter().position(|(p, _, _)| *p == pid) {
            let (_, idx, start) = pending.remove(pos);
            results.push((
                idx,
                Termination {
                    raw_status: status,
                    elapsed_ms: start.elapsed_ms(),
                },
            ));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, TestOutput};
    use crate::verdict::Verdict;
    use std::os::raw::{c_char, c_int};
    use std::path::PathBuf;

    unsafe extern "C" fn succeeds(_argc: c_int, _argv: *const *const c_char) -> c_int {
        0
    }

    unsafe extern "C" fn fails(_argc: c_int, _argv: *const *const c_char) -> c_int {
        1
    }

    fn cfg() -> EngineConfig {
        EngineConfig {
            program: PathBuf::from("testfw"),
            timeout_s: 0,
            log_sink: None,
            silent: false,
            mode: Mode::ForkP,
            test_output: TestOutput::Null,
            verbose: false,
        }
    }

    #[test]
    fn runs_every_test_and_reports_all_results() {
        let tests = vec![
            TestCase { suite: "s".into(), name: "a".into(), entry: succeeds },
            TestCase { suite: "s".into(), name: "b".into(), entry: fails },
            TestCase { suite: "s".into(), name: "c".into(), entry: succeeds },
        ];
        let results = run_suite(&cfg(), &tests, &[]);
        assert_eq!(results.len(), 3);

        let mut by_idx: Vec<Option<Verdict>> = vec![None; 3];
        for (idx, t) in &results {
            by_idx[*idx] = Some(t.classify());
        }
        assert_eq!(by_idx[0], Some(Verdict::Success));
        assert_eq!(by_idx[1], Some(Verdict::Failure(1)));
        assert_eq!(by_idx[2], Some(Verdict::Success));
    }
}
