// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fork/wait plumbing behind the `forks` and `forkp` runners:
//! a supervisor process forks a worker to actually run
//! the test and, when a timeout is configured, an alarm process that
//! kills the worker if it outruns the deadline. The supervisor's own
//! exit status is what the caller ends up `waitpid`-ing on, so it is
//! built to look, to that caller, just like the worker would have looked
//! if it had run unsupervised.
//!
//! `fork()` in a process that might have more than one thread running is
//! only safe if the child sticks to async-signal-safe calls before it
//! either `_exit`s or calls an extern test entry point; every child path
//! below does exactly that.

use std::os::raw::{c_char, c_int};

use crate::argv::CArgs;
use crate::config::EngineConfig;
use crate::redirect;
use crate::registry::TestCase;
use crate::verdict::{TIMEOUT_CODE, TIMEOUT_SIGNAL};
use crate::wait;

/// Grace period after sending [`TIMEOUT_SIGNAL`] before the alarm
/// escalates to `SIGKILL`, for tests that ignore or block the former.
/// A hardened implementation is expected to do this.
const ESCALATION_GRACE_SECS: u32 = 1;

/// Forks the worker process, which runs `test.entry` with `tail` forwarded
/// as its argv and never returns to the caller (it always `_exit`s).
/// Returns the worker's pid to the caller (the supervisor).
///
/// # Safety
/// Must be called from a single-threaded supervisor process, since the
/// child only calls `fork`-safe functions until it calls the test entry
/// point or `_exit`s.
unsafe fn spawn_worker(test: &TestCase, cfg: &EngineConfig, tail: &[String]) -> libc::pid_t {
    let program = cfg.program.to_string_lossy().into_owned();
    let args = CArgs::build(&program, tail);

    match libc::fork() {
        0 => {
            redirect::apply(&cfg.test_output);
            let (argc, argv): (c_int, *const *const c_char) = args.as_raw();
            let code = (test.entry)(argc, argv);
            libc::_exit(code);
        }
        pid if pid > 0 => pid,
        _ => {
            // fork() failed; report it to the supervisor as if the worker
            // itself had failed immediately, rather than panicking inside
            // a process we can't safely unwind.
            libc::_exit(127);
        }
    }
}

/// Forks the alarm process when `cfg.timeout_s > 0`. The alarm sleeps for
/// the timeout, signals the worker, waits a short grace period, and
/// escalates to `SIGKILL` if the worker is still alive, then exits with
/// [`TIMEOUT_CODE`]. Returns `None` when no timeout is configured.
fn spawn_alarm(worker_pid: libc::pid_t, timeout_s: u64) -> Option<libc::pid_t> {
    if timeout_s == 0 {
        return None;
    }
    // SAFETY: single-threaded supervisor; child only calls libc functions
    // before `_exit`.
    let pid = unsafe { libc::fork() };
    match pid {
        0 => {
            unsafe {
                libc::sleep(timeout_s as u32);
                libc::kill(worker_pid, TIMEOUT_SIGNAL);
                libc::sleep(ESCALATION_GRACE_SECS);
                if libc::kill(worker_pid, 0) == 0 {
                    libc::kill(worker_pid, libc::SIGKILL);
                }
                libc::_exit(TIMEOUT_CODE);
            }
        }
        p if p > 0 => Some(p),
        _ => None,
    }
}

/// Kills (if still alive) and reaps the alarm process so it never
/// outlives the test it was watching.
fn retire_alarm(alarm_pid: Option<libc::pid_t>) {
    if let Some(pid) = alarm_pid {
        unsafe {
            libc::kill(pid, libc::SIGKILL); // ESRCH if already gone; ignored
            let mut status: c_int = 0;
            libc::waitpid(pid, &mut status, 0);
        }
    }
}

/// Blocks until `pid` terminates and returns its raw wait status.
fn wait_for(pid: libc::pid_t) -> i32 {
    let mut status: c_int = 0;
    unsafe {
        libc::waitpid(pid, &mut status, 0);
    }
    status
}

/// Runs in the supervisor child after it has forked the worker (and
/// maybe the alarm). Never returns: it always terminates via `_exit` or
/// by re-raising a signal, so that `waitpid`-ing on the supervisor from
/// the engine yields a status equivalent to the one the worker would
/// have produced running unsupervised, except a timeout is translated
/// into the synthetic [`TIMEOUT_CODE`] exit.
fn supervisor_main(worker_pid: libc::pid_t, alarm_pid: Option<libc::pid_t>) -> ! {
    let status = wait_for(worker_pid);
    retire_alarm(alarm_pid);

    unsafe {
        if wait::signaled(status) {
            let sig = wait::term_sig(status);
            if sig == TIMEOUT_SIGNAL {
                libc::_exit(TIMEOUT_CODE);
            }
            // Re-raise the same signal on ourselves so the engine's own
            // `waitpid` on the supervisor observes the worker's real
            // cause of death.
            libc::signal(sig, libc::SIG_DFL);
            libc::raise(sig);
            // Only reached if `sig`'s default disposition doesn't
            // terminate the process (shouldn't happen for the signals a
            // crashing test raises).
            libc::_exit(128 + sig);
        } else {
            libc::_exit(wait::exit_status(status));
        }
    }
}

/// Forks the full supervisor tree (supervisor -> worker, + optional
/// alarm) for one test and returns the supervisor's pid to the engine.
/// The engine `waitpid`s on this pid exactly as it would on a plain
/// child process.
///
/// # Safety
/// Must be called from a single-threaded process; see [`spawn_worker`].
pub unsafe fn spawn_supervisor(test: &TestCase, cfg: &EngineConfig, tail: &[String]) -> libc::pid_t {
    if cfg.verbose {
        eprintln!("testfw: spawning supervisor for \"{}\"", test.id());
    }
    match libc::fork() {
        0 => {
            let worker_pid = spawn_worker(test, cfg, tail);
            let alarm_pid = spawn_alarm(worker_pid, cfg.timeout_s);
            supervisor_main(worker_pid, alarm_pid);
        }
        pid if pid > 0 => {
            if cfg.verbose {
                eprintln!("testfw: supervisor pid {pid} running \"{}\"", test.id());
            }
            pid
        }
        _ => {
            // Top-level fork failure: nothing ran. Exit code 127 mirrors
            // `spawn_worker`'s treatment of the same failure.
            libc::_exit(127);
        }
    }
}

/// Blocks until the supervisor at `pid` terminates and returns its raw
/// wait status, suitable for [`crate::verdict::Termination`].
pub fn wait_for_supervisor(pid: libc::pid_t) -> i32 {
    wait_for(pid)
}
