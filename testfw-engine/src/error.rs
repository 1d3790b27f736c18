// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types the engine needs to match on, as opposed to opaque
//! `anyhow::Error` for configuration/internal faults.

use std::fmt;

/// A `<suite>_<name>` symbol was not defined in the host executable.
///
/// Kept distinct from `anyhow::Error` because `Registry::register_suite`
/// needs to tell "no symbols matched the prefix" (a discovery error) apart
/// from other failures, and because a caller resolving a single test by
/// name needs the exact symbol string in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNotFound {
    pub symbol: String,
}

impl fmt::Display for SymbolNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symbol \"{}\" not found", self.symbol)
    }
}

impl std::error::Error for SymbolNotFound {}
