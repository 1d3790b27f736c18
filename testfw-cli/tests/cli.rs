// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end CLI tests against the bundled sample suite. These need
//! the `demo-suite` feature's symbols to exist in the test binary, so
//! this whole file is a no-op unless the crate is built with
//! `cargo test --features demo-suite`.

#![cfg(feature = "demo-suite")]

use assert_cmd::Command;
use predicates::prelude::*;

fn testfw() -> Command {
    Command::cargo_bin("testfw").expect("binary built")
}

#[test]
fn success_test_passes() {
    testfw()
        .args(["-r", "test.success", "-m", "forks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]"))
        .stdout(predicate::str::contains("100% tests passed, 0 tests failed out of 1"));
}

#[test]
fn failure_test_reports_its_exit_code() {
    testfw()
        .args(["-r", "test.failure", "-m", "forks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[FAILURE]"))
        .stdout(predicate::str::contains("status 1"))
        .stdout(predicate::str::contains("0% tests passed, 1 tests failed out of 1"));
}

#[test]
fn segfault_test_is_classified_as_killed() {
    testfw()
        .args(["-r", "test.segfault", "-m", "forks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[KILLED]"));
}

#[test]
fn slow_test_times_out_under_a_short_deadline() {
    testfw()
        .args(["-r", "test.sleep", "-m", "forks", "-t", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[TIMEOUT]"));
}

#[test]
fn register_suite_lists_every_discovered_test() {
    testfw()
        .args(["-R", "test", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test.success"))
        .stdout(predicate::str::contains("test.hello"));
}

#[test]
fn nofork_mode_forwards_tail_argv_to_the_test() {
    testfw()
        .args(["-r", "test.args", "-m", "nofork", "--", "foo", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[SUCCESS]"));
}

#[test]
fn help_flag_exits_non_zero() {
    testfw().arg("-h").assert().failure();
}

#[test]
fn empty_suite_after_registration_is_a_configuration_error() {
    testfw()
        .args(["-R", "no_such_suite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
