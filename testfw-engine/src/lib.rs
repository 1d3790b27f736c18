// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process-isolated test execution engine.
//!
//! Built around six small, independently testable pieces:
//! a [`Clock`](clock) for measuring test wall time, a [`resolver`] that
//! finds a test's entry point by symbol name or enumerates a whole
//! suite, a [`registry`] holding the tests selected to run, a
//! [`formatter`] rendering one outcome per line, three [`runner`]
//! policies trading isolation for speed, and an [`engine`] that drives
//! all of them for a whole run. [`config`] carries the run's settings
//! through all of it explicitly; nothing here is global state.

pub mod argv;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod redirect;
pub mod registry;
pub mod resolver;
mod runner;
pub mod verdict;
mod wait;

pub use config::{EngineConfig, Mode, TestOutput};
pub use engine::Summary;
pub use error::SymbolNotFound;
pub use registry::{Registry, TestCase};
pub use resolver::TestEntry;
pub use verdict::{Termination, Verdict, TIMEOUT_CODE, TIMEOUT_SIGNAL};
