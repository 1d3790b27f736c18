// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Engine ties the Registry, Runner, and Diagnostic Formatter
//! together: it walks every registered test, runs it
//! under the configured policy, writes one verdict line per test, and
//! prints the final summary line. Holds no state of its own beyond what
//! a single `run` call needs.

use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::config::{EngineConfig, Mode};
use crate::formatter::{self, ColorMode};
use crate::registry::Registry;
use crate::runner;
use crate::verdict::Termination;

/// Tally of a completed run, used to build the final summary line and
/// as the process's own exit status.
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// The `=> P% tests passed, F tests failed out of N` line.
    fn format(&self) -> String {
        let passed = self.total - self.failed;
        let pct = if self.total == 0 {
            100.0
        } else {
            100.0 * passed as f64 / self.total as f64
        };
        format!(
            "=> {:.0}% tests passed, {} tests failed out of {}",
            pct, self.failed, self.total
        )
    }
}

/// Runs every test in `registry` under `cfg`, writing a verdict line per
/// test and a summary line at the end (both suppressed when
/// `cfg.silent`), and returns the pass/fail tally.
pub fn run_all(cfg: &EngineConfig, registry: &Registry, tail: &[String]) -> anyhow::Result<Summary> {
    let mut log_sink = open_log_sink(cfg)?;
    let color = if cfg.silent {
        ColorMode::Never
    } else {
        terminal_color_mode()
    };

    let total = registry.len();
    let mut failed = 0usize;

    let mut emit = |test: &crate::registry::TestCase, termination: &Termination| -> anyhow::Result<()> {
        if !termination.classify().is_success() {
            failed += 1;
        }
        if !cfg.silent {
            formatter::write_verdict(&mut io::stdout(), test, termination, color)?;
        }
        if let Some(sink) = log_sink.as_mut() {
            formatter::write_verdict(sink, test, termination, ColorMode::Never)?;
        }
        Ok(())
    };

    match cfg.mode {
        Mode::NoFork | Mode::Forks => {
            for test in registry.iter() {
                if cfg.verbose {
                    eprintln!("testfw: running \"{}\"", test.id());
                }
                let termination = runner::run_one(cfg, test, tail);
                emit(test, &termination)?;
            }
        }
        Mode::ForkP => {
            let tests: Vec<_> = registry.iter().cloned().collect();
            let results = runner::run_suite_forkp(cfg, &tests, tail);
            for (idx, termination) in &results {
                emit(&tests[*idx], termination)?;
            }
        }
    }

    let summary = Summary { total, failed };
    if !cfg.silent {
        println!("{}", summary.format());
    }
    if let Some(sink) = log_sink.as_mut() {
        writeln!(sink, "{}", summary.format())?;
    }

    Ok(summary)
}

fn open_log_sink(cfg: &EngineConfig) -> anyhow::Result<Option<std::fs::File>> {
    match &cfg.log_sink {
        None => Ok(None),
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Ok(Some(file)),
            Err(e) => {
                eprintln!("testfw: could not open log sink {}: {e}", path.display());
                Ok(None)
            }
        },
    }
}

fn terminal_color_mode() -> ColorMode {
    if atty::is(atty::Stream::Stdout) {
        ColorMode::Always
    } else {
        ColorMode::Never
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_all_passed_when_nothing_failed() {
        let s = Summary { total: 4, failed: 0 };
        assert!(s.all_passed());
        assert_eq!(s.format(), "=> 100% tests passed, 0 tests failed out of 4");
    }

    #[test]
    fn summary_reports_failures() {
        let s = Summary { total: 4, failed: 1 };
        assert!(!s.all_passed());
        assert_eq!(s.format(), "=> 75% tests passed, 1 tests failed out of 4");
    }

    #[test]
    fn summary_on_an_empty_registry_reports_full_marks() {
        let s = Summary { total: 0, failed: 0 };
        assert_eq!(s.format(), "=> 100% tests passed, 0 tests failed out of 0");
    }
}
