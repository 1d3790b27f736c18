// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolves `<suite>_<name>` test symbols in the running host executable.
//!
//! A single lookup goes through `dlsym(RTLD_DEFAULT, ..)`, the direct
//! equivalent of the original C framework's `dlopen(NULL, RTLD_LAZY)` +
//! `dlsym` (we're already the process in question, so there is no handle
//! to open). Bulk discovery for `-R <suite>` can't be done with `dlsym`
//! (it has no "give me everything matching a prefix" mode), so it reads
//! the host executable's own ELF image from disk and walks its symbol
//! tables — the native-path alternative the design notes call for in
//! place of shelling out to `nm`.

use std::ffi::{c_void, CString};
use std::fs;
use std::os::raw::{c_char, c_int};

use anyhow::{Context, Result};

use crate::error::SymbolNotFound;

/// A test entry point: `int (*)(int argc, char **argv)`, C argv semantics.
pub type TestEntry = unsafe extern "C" fn(c_int, *const *const c_char) -> c_int;

/// Resolves exactly `<suite>_<name>` against the process's own symbol
/// table. Fails with [`SymbolNotFound`] when the symbol isn't defined.
pub fn resolve(suite: &str, name: &str) -> Result<TestEntry, SymbolNotFound> {
    let symbol = format!("{suite}_{name}");
    let cname = CString::new(symbol.clone()).unwrap_or_else(|_| {
        // A NUL can't occur in a suite/name pair built from CLI args that
        // were themselves NUL-free strings, but handle it rather than
        // panic on attacker-controlled input.
        CString::new("<invalid>").unwrap()
    });

    let ptr = unsafe { libc::dlsym(libc::RTLD_DEFAULT, cname.as_ptr()) };
    if ptr.is_null() {
        return Err(SymbolNotFound { symbol });
    }
    // SAFETY: the host contract requires every `<suite>_<name>`
    // symbol to have type `int (int, char **)`. We can't verify that at
    // the symbol-table level; a mistyped test function is the caller's
    // bug, same as in the C original.
    Ok(unsafe { std::mem::transmute::<*mut c_void, TestEntry>(ptr) })
}

/// Returns every name `n` such that `<suite>_<n>` is a defined symbol in
/// the host executable, in whatever order the symbol tables list them.
pub fn enumerate(suite: &str) -> Result<Vec<String>> {
    let exe = std::env::current_exe().context("locating host executable")?;
    let image = fs::read(&exe)
        .with_context(|| format!("reading host executable {}", exe.display()))?;
    let elf = goblin::elf::Elf::parse(&image)
        .with_context(|| format!("parsing ELF image {}", exe.display()))?;

    let prefix = format!("{suite}_");
    let mut names = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for sym in elf.dynsyms.iter().chain(elf.syms.iter()) {
        if sym.st_shndx == goblin::elf::section_header::SHN_UNDEF as usize {
            continue;
        }
        let Some(raw) = elf
            .dynstrtab
            .get_at(sym.st_name)
            .or_else(|| elf.strtab.get_at(sym.st_name))
        else {
            continue;
        };
        // Some object formats (historically Mach-O) prepend a leading
        // underscore to every C symbol; strip at most one before matching.
        let stripped = raw.strip_prefix('_').unwrap_or(raw);
        if let Some(test_name) = stripped.strip_prefix(&prefix) {
            if !test_name.is_empty() && seen.insert(test_name.to_string()) {
                names.push(test_name.to_string());
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[no_mangle]
    extern "C" fn resolver_tests_probe(_argc: c_int, _argv: *const *const c_char) -> c_int {
        0
    }

    #[test]
    fn resolves_a_symbol_defined_in_this_binary() {
        let entry = resolve("resolver_tests", "probe").expect("symbol should resolve");
        let rc = unsafe { entry(0, std::ptr::null()) };
        assert_eq!(rc, 0);
    }

    #[test]
    fn missing_symbol_is_reported_by_name() {
        let err = resolve("resolver_tests", "does_not_exist").unwrap_err();
        assert_eq!(err.symbol, "resolver_tests_does_not_exist");
    }
}
