//! Deduplicated, sorted set of package names.

use serde::Serialize;
use std::collections::BTreeSet;

/// Unique package names collected from a graph dump.
///
/// Only names are stored; versions are dropped before insertion. Iteration
/// is in lexical order so reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageSet {
    names: BTreeSet<String>,
}

impl PackageSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name. Returns false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Returns true if `name` has been collected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no package has been collected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
