// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Same reasoning as `testfw-engine/build.rs`: the symbol resolver's bulk
// `-R <suite>` path walks this binary's own ELF symbol table, and
// `dlsym(RTLD_DEFAULT, ..)` only finds what the dynamic symbol table
// exposes. Needed here in particular for the `demo-suite` feature's
// `#[no_mangle] extern "C"` test functions to be discoverable at all.
fn main() {
    #[cfg(target_os = "linux")]
    println!("cargo:rustc-link-arg=-rdynamic");
}
