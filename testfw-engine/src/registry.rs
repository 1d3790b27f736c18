// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Append-only ordered collection of registered tests.

use anyhow::{bail, Result};

use crate::resolver::{self, TestEntry};

/// One registered test: a printable `suite.name` id paired with its entry
/// point. Immutable once appended.
#[derive(Clone)]
pub struct TestCase {
    pub suite: String,
    pub name: String,
    pub entry: TestEntry,
}

impl TestCase {
    /// The printable `suite.name` id.
    pub fn id(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }
}

/// Ordered, append-only store. Insertion order is execution order.
/// Duplicates are permitted; the registry imposes no uniqueness
/// constraint.
#[derive(Default)]
pub struct Registry {
    tests: Vec<TestCase>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn at(&self, k: usize) -> Option<&TestCase> {
        self.tests.get(k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.tests.iter()
    }

    /// Appends a test whose entry point is already known (for in-process
    /// registration, not part of the CLI surface but useful to embedders
    /// of the engine as a library).
    pub fn register_by_callable(&mut self, suite: &str, name: &str, entry: TestEntry) {
        self.tests.push(TestCase {
            suite: suite.to_string(),
            name: name.to_string(),
            entry,
        });
    }

    /// Resolves `<suite>_<name>` via the symbol resolver and appends it.
    /// Fails fatally (no partial registration) if the symbol is missing.
    pub fn register_by_name(&mut self, suite: &str, name: &str) -> Result<()> {
        let entry = resolver::resolve(suite, name)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        self.tests.push(TestCase {
            suite: suite.to_string(),
            name: name.to_string(),
            entry,
        });
        Ok(())
    }

    /// Enumerates every `<suite>_*` symbol and appends one test per match.
    /// Returns the number of tests appended. Fails if the suite is empty
    /// after enumeration.
    pub fn register_suite(&mut self, suite: &str) -> Result<usize> {
        let names = resolver::enumerate(suite)?;
        if names.is_empty() {
            bail!("no tests are registered in suite \"{suite}\"");
        }
        for name in &names {
            self.register_by_name(suite, name)?;
        }
        Ok(names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::{c_char, c_int};

    unsafe extern "C" fn stub(_argc: c_int, _argv: *const *const c_char) -> c_int {
        0
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut reg = Registry::new();
        reg.register_by_callable("s", "a", stub);
        reg.register_by_callable("s", "b", stub);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.at(0).unwrap().id(), "s.a");
        assert_eq!(reg.at(1).unwrap().id(), "s.b");
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut reg = Registry::new();
        reg.register_by_callable("s", "a", stub);
        reg.register_by_callable("s", "a", stub);
        assert_eq!(reg.len(), 2);
    }
}
