// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `testfw`: the command-line front end for the test-harness engine.
//! Parses flags, builds a [`testfw_engine::Registry`] and
//! [`testfw_engine::EngineConfig`], and either lists or executes the
//! registered tests.

mod args;
#[cfg(feature = "demo-suite")]
mod demo;
mod usage;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use args::Args;
use testfw_engine::{engine, EngineConfig, Mode, Registry, TestOutput};

const DEFAULT_SUITE: &str = "test";

fn main() {
    let raw: Vec<String> = std::env::args().collect();
    let program = raw.first().cloned().unwrap_or_else(|| "testfw".to_string());

    if usage::requested(&raw) {
        eprint!("{}", usage::text(&program));
        std::process::exit(1);
    }

    // A hanging worker under a broken terminal shouldn't also wedge
    // Ctrl-C handling for the engine itself; install a no-op handler so
    // SIGINT doesn't kill `testfw` mid-summary the way the default
    // disposition would.
    if ctrlc::set_handler(|| {}).is_err() {
        eprintln!("warning: failed to install Ctrl-C handler");
    }

    if let Err(e) = run(&program) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(program: &str) -> Result<()> {
    let args = Args::parse();

    let mode = Mode::from_str(&args.mode).map_err(|e| anyhow::anyhow!("{e}"))?;
    let timeout_s = if args.no_timeout { 0 } else { args.timeout };
    let silent = args.silent || args.full_silent;

    let (test_output, log_sink) = resolve_output(&args);

    let cfg = EngineConfig {
        program: PathBuf::from(program),
        timeout_s,
        log_sink,
        silent,
        mode,
        test_output,
        verbose: args.verbose,
    };

    let registry = build_registry(&args)?;
    if registry.is_empty() {
        bail!("no tests are registered in suite \"{DEFAULT_SUITE}\"");
    }

    if args.list {
        for test in registry.iter() {
            println!("{}", test.id());
        }
        return Ok(());
    }

    let summary = engine::run_all(&cfg, &registry, &args.tail).context("running the test suite")?;
    let _ = summary; // engine's own exit status reflects configuration outcome only
    Ok(())
}

/// `-r`/`-R` build the registry; with neither given, the original
/// framework's own default of registering the whole `test` suite
/// applies.
fn build_registry(args: &Args) -> Result<Registry> {
    let mut registry = Registry::new();

    for entry in &args.register {
        let (suite, name) = entry
            .split_once('.')
            .with_context(|| format!("invalid test name \"{entry}\" (expected suite.name)"))?;
        if args.verbose {
            eprintln!("testfw: resolving \"{entry}\"");
        }
        registry
            .register_by_name(suite, name)
            .with_context(|| format!("registering \"{entry}\""))?;
    }

    for suite in &args.register_suite {
        if args.verbose {
            eprintln!("testfw: enumerating suite \"{suite}\"");
        }
        let n = registry
            .register_suite(suite)
            .with_context(|| format!("registering suite \"{suite}\""))?;
        if args.verbose {
            eprintln!("testfw: registered {n} test(s) from suite \"{suite}\"");
        }
    }

    if args.register.is_empty() && args.register_suite.is_empty() {
        registry
            .register_suite(DEFAULT_SUITE)
            .with_context(|| format!("registering suite \"{DEFAULT_SUITE}\""))?;
    }

    Ok(registry)
}

/// `-o`/`-O`/`-S` all ultimately pick one redirection target for test
/// stdio; `-o`'s path additionally becomes the framework's own log sink.
/// `-O`/`-S` discard test output to
/// `/dev/null` without also routing framework diagnostics through a
/// file handle that's pointless to open.
fn resolve_output(args: &Args) -> (TestOutput, Option<PathBuf>) {
    if args.full_silent || args.output_null {
        return (TestOutput::Null, None);
    }
    if let Some(path) = &args.output {
        return (TestOutput::File(path.clone()), Some(path.clone()));
    }
    (TestOutput::Inherit, None)
}
