// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flag surface for `testfw`. `-h`/`-?` are handled outside
//! clap in [`crate::usage`] because this tool's convention, inherited
//! from the `getopt`-based original, is to exit non-zero on explicit
//! help — the opposite of clap's own default.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "testfw", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Register a single test by fully-qualified `suite.name`. Repeatable.
    #[clap(short = 'r', value_name = "SUITE.NAME", multiple_occurrences = true)]
    pub register: Vec<String>,

    /// Register every `<suite>_*` symbol as a test. Repeatable.
    #[clap(short = 'R', value_name = "SUITE", multiple_occurrences = true)]
    pub register_suite: Vec<String>,

    /// Execute all registered tests (default action).
    #[clap(short = 'x')]
    pub execute: bool,

    /// List `suite.name` for all registered tests, one per line.
    #[clap(short = 'l', conflicts_with = "execute")]
    pub list: bool,

    /// Execution mode: `forks` (default), `forkp`, or `nofork`.
    #[clap(short = 'm', value_name = "MODE", default_value = "forks")]
    pub mode: String,

    /// Per-test timeout in seconds.
    #[clap(short = 't', value_name = "SECONDS", default_value_t = 2)]
    pub timeout: u64,

    /// Disable the timeout entirely; overrides `-t`.
    #[clap(short = 'T')]
    pub no_timeout: bool,

    /// Redirect test stdout/stderr to this log file.
    #[clap(short = 'o', value_name = "PATH", conflicts_with = "output_null")]
    pub output: Option<PathBuf>,

    /// Redirect test stdout/stderr to the null device.
    #[clap(short = 'O')]
    pub output_null: bool,

    /// Suppress framework verdict lines and the summary on stdout.
    #[clap(short = 's')]
    pub silent: bool,

    /// Suppress both framework and test output.
    #[clap(short = 'S')]
    pub full_silent: bool,

    /// Forwarded to every test's argv after `--`.
    #[clap(last = true)]
    pub tail: Vec<String>,

    /// Trace process spawn/reap and symbol resolution to stderr.
    #[clap(short = 'v', long = "verbose")]
    pub verbose: bool,
}
