// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `forks` runner: one supervised fork per test, with an
//! optional alarm process enforcing the configured timeout. Grounded in
//! `examples/original_source/testfw.c`'s `run_test_forks`, with the
//! fork/wait mechanics factored out into [`super::supervise`].

use crate::clock;
use crate::config::EngineConfig;
use crate::registry::TestCase;
use crate::verdict::Termination;

use super::supervise;

pub fn run(cfg: &EngineConfig, test: &TestCase, tail: &[String]) -> Termination {
    let start = clock::mark();
    // SAFETY: the engine runs single-threaded through its whole
    // lifetime; no other thread can be mid-syscall across
    // this fork.
    let supervisor_pid = unsafe { supervise::spawn_supervisor(test, cfg, tail) };
    let status = supervise::wait_for_supervisor(supervisor_pid);
    let elapsed_ms = start.elapsed_ms();

    Termination {
        raw_status: status,
        elapsed_ms,
    }
}
