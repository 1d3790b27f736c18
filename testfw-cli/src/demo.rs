// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sample test functions exposed under the `demo-suite` feature, so this
//! binary has real `<suite>_<name>` symbols for `-R test`/`-R othertest`
//! to discover and run. One Rust function per entry point in the
//! original framework's own sample suite.
//!
//! Every function is `#[no_mangle] extern "C"` so it lands in the
//! binary's symbol table under exactly the name the resolver looks for;
//! see the crate's `build.rs` for the linker flag that keeps it visible
//! there.

use std::os::raw::{c_char, c_int};

#[no_mangle]
pub extern "C" fn test_success(_argc: c_int, _argv: *const *const c_char) -> c_int {
    0
}

#[no_mangle]
pub extern "C" fn test_failure(_argc: c_int, _argv: *const *const c_char) -> c_int {
    1
}

#[no_mangle]
pub extern "C" fn test_segfault(_argc: c_int, _argv: *const *const c_char) -> c_int {
    unsafe {
        let p: *mut i32 = std::ptr::null_mut();
        *p = 0;
    }
    0
}

#[no_mangle]
pub extern "C" fn test_alarm(_argc: c_int, _argv: *const *const c_char) -> c_int {
    unsafe {
        libc::raise(libc::SIGALRM);
    }
    0
}

#[no_mangle]
pub extern "C" fn test_assert(_argc: c_int, _argv: *const *const c_char) -> c_int {
    assert!(1 + 1 == 3, "deliberately false assertion");
    0
}

#[no_mangle]
pub extern "C" fn test_sleep(_argc: c_int, _argv: *const *const c_char) -> c_int {
    std::thread::sleep(std::time::Duration::from_secs(5));
    0
}

#[no_mangle]
pub extern "C" fn test_args(argc: c_int, argv: *const *const c_char) -> c_int {
    if argc < 1 {
        return 1;
    }
    let mut k = 0;
    while !unsafe { *argv.offset(k as isize) }.is_null() {
        k += 1;
    }
    if k != argc {
        return 1;
    }
    0
}

#[no_mangle]
pub extern "C" fn test_infiniteloop(_argc: c_int, _argv: *const *const c_char) -> c_int {
    loop {
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
}

#[no_mangle]
pub extern "C" fn test_hello(_argc: c_int, _argv: *const *const c_char) -> c_int {
    println!("hello");
    0
}

#[no_mangle]
pub extern "C" fn test_goodbye(_argc: c_int, _argv: *const *const c_char) -> c_int {
    println!("goodbye");
    0
}

#[no_mangle]
pub extern "C" fn othertest_success(_argc: c_int, _argv: *const *const c_char) -> c_int {
    0
}

#[no_mangle]
pub extern "C" fn othertest_failure(_argc: c_int, _argv: *const *const c_char) -> c_int {
    1
}
