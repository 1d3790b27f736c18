// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builds a C-style `argv` for a test entry point: `argv[0]` is the
//! program name as presented to the test, `argv[1..]` is the tail
//! forwarded from the CLI's `--`.

use std::ffi::CString;
use std::os::raw::c_char;

/// Owns the `CString`s backing a null-terminated `char **argv`, so the
/// raw pointers handed to a test entry point stay valid for as long as
/// this value is alive. Built once in the parent; safe to reference from
/// a forked child because `fork` duplicates the address space these
/// `CString` buffers live in.
pub struct CArgs {
    _owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CArgs {
    pub fn build(program: &str, tail: &[String]) -> Self {
        let owned: Vec<CString> = std::iter::once(program)
            .chain(tail.iter().map(String::as_str))
            .map(|s| CString::new(s).unwrap_or_else(|_| CString::new("<invalid>").unwrap()))
            .collect();
        let mut ptrs: Vec<*const c_char> = owned.iter().map(|c| c.as_ptr()).collect();
        ptrs.push(std::ptr::null());
        CArgs { _owned: owned, ptrs }
    }

    /// `(argc, argv)`, C-style: `argv` is null-terminated and has
    /// `argc + 1` entries.
    pub fn as_raw(&self) -> (i32, *const *const c_char) {
        ((self.ptrs.len() - 1) as i32, self.ptrs.as_ptr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argc_counts_program_plus_tail() {
        let args = CArgs::build("prog", &["foo".to_string(), "bar".to_string()]);
        let (argc, _) = args.as_raw();
        assert_eq!(argc, 3);
    }

    #[test]
    fn argv_is_null_terminated() {
        let args = CArgs::build("prog", &[]);
        let (argc, argv) = args.as_raw();
        assert_eq!(argc, 1);
        unsafe {
            assert!(!(*argv).is_null());
            assert!((*argv.offset(1)).is_null());
        }
    }
}
