// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine configuration: created once at startup, read-only
//! afterwards, threaded explicitly through every Runner and the
//! Formatter rather than kept as process-wide mutable state.

use std::path::PathBuf;

/// Isolation/supervision policy a test runs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// In-process: a crash in the test kills the whole harness.
    NoFork,
    /// Per-test supervised fork with timeout enforcement.
    Forks,
    /// Per-suite parallel fork; all tests launched as siblings.
    ForkP,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nofork" => Ok(Mode::NoFork),
            "forks" => Ok(Mode::Forks),
            "forkp" => Ok(Mode::ForkP),
            other => Err(format!("invalid execution mode \"{other}\"")),
        }
    }
}

/// Where a forked worker's stdout/stderr goes. Never parsed by the
/// engine, only redirected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestOutput {
    Inherit,
    File(PathBuf),
    Null,
}

/// Created once from parsed CLI args.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Path to the host executable, used for symbol discovery.
    pub program: PathBuf,
    /// `0` means "no timeout".
    pub timeout_s: u64,
    /// Appended-to in silent mode when set.
    pub log_sink: Option<PathBuf>,
    /// Suppresses framework verdict lines on stdout when true.
    pub silent: bool,
    pub mode: Mode,
    pub test_output: TestOutput,
    /// Traces process spawn/reap and symbol resolution to stderr when
    /// true (`-v`/`--verbose`).
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mode_parses_known_values() {
        assert_eq!(Mode::from_str("forks").unwrap(), Mode::Forks);
        assert_eq!(Mode::from_str("forkp").unwrap(), Mode::ForkP);
        assert_eq!(Mode::from_str("nofork").unwrap(), Mode::NoFork);
    }

    #[test]
    fn mode_rejects_unknown_values() {
        assert!(Mode::from_str("bogus").is_err());
    }
}
