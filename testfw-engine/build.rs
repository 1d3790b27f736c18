// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// The resolver looks up test symbols with `dlsym(RTLD_DEFAULT, ..)` against
// the running executable itself. On Linux that only finds symbols the
// linker put in the dynamic symbol table, which `-rdynamic` forces for an
// executable's global symbols. Applies to this crate's own test harness
// binary (exercised in `resolver::tests`) as well as to `testfw-cli`,
// which sets the same flag for the same reason.
fn main() {
    #[cfg(target_os = "linux")]
    println!("cargo:rustc-link-arg=-rdynamic");
}
