// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-written usage text, printed on `-h`/`-?` and on a
//! configuration error. Kept outside clap's own `--help` machinery
//! because this tool exits non-zero on explicit help, matching the
//! `getopt`-based original rather than clap's convention.

pub fn text(program: &str) -> String {
    format!(
        "Usage: {program} [options] [actions] [-- <testargs> ...]\n\
         Register Options:\n\
         \x20 -r <suite.name>: register a function \"suite_name()\" as a test\n\
         \x20 -R <suite>: register all functions \"suite_*()\" as a test suite\n\
         Actions:\n\
         \x20 -x: execute all registered tests (default action)\n\
         \x20 -l: list all registered tests\n\
         Execution Options:\n\
         \x20 -m <mode>: set execution mode: \"forks\"|\"forkp\"|\"nofork\" [default \"forks\"]\n\
         Other Options:\n\
         \x20 -o <logfile>: redirect test output to a log file\n\
         \x20 -O: redirect test stdout & stderr to /dev/null\n\
         \x20 -t <timeout>: set time limit for each test, in seconds [default 2]\n\
         \x20 -T: no timeout\n\
         \x20 -s: silent mode (framework only)\n\
         \x20 -S: full silent mode (both framework and test output)\n\
         \x20 -h, -?: print this help message\n"
    )
}

/// True if any raw CLI argument (before clap ever sees them) requests
/// help. Checked first so help exits `1` regardless of what else was
/// passed.
pub fn requested(raw_args: &[String]) -> bool {
    raw_args
        .iter()
        .skip(1)
        .take_while(|a| a.as_str() != "--")
        .any(|a| a == "-h" || a == "-?" || a == "--help")
}
