// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Executes a registered test under one of the three isolation policies.

mod forkp;
mod forks;
mod nofork;
mod supervise;

use crate::config::EngineConfig;
use crate::registry::TestCase;
use crate::verdict::Termination;

pub use forkp::run_suite as run_suite_forkp;

/// Runs one test under `cfg.mode`, blocking until it completes.
///
/// Not valid to call with `Mode::ForkP`: that policy launches every test
/// in the suite as a sibling up front, so the Engine calls
/// [`run_suite_forkp`] once for the whole registry instead of this
/// function per test.
pub fn run_one(cfg: &EngineConfig, test: &TestCase, tail: &[String]) -> Termination {
    match cfg.mode {
        crate::config::Mode::NoFork => nofork::run(cfg, test, tail),
        crate::config::Mode::Forks => forks::run(cfg, test, tail),
        crate::config::Mode::ForkP => {
            unreachable!("forkp is run suite-wide via run_suite_forkp, not per test")
        }
    }
}
