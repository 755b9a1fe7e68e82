//! Shared types for graph edge parsing.
//!
//! This module defines the token produced for each line of a
//! `go mod graph` dump.

use serde::Serialize;
use std::fmt;

/// One directed edge of the module graph: `source` requires `target`.
///
/// The source may be the unversioned main module; the target is always
/// a versioned requirement.
///
/// # Example
///
/// ```
/// use gomodcount::parser::EdgeToken;
///
/// let edge = EdgeToken::new("example.com/mod", None, "example.com/dep", "v1.2.3");
/// assert_eq!(edge.to_string(), "example.com/mod example.com/dep@v1.2.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeToken {
    /// Module path of the requiring package.
    pub source_name: String,

    /// Version of the requiring package, absent for the main module.
    pub source_version: Option<String>,

    /// Module path of the required package.
    pub target_name: String,

    /// Version of the required package.
    pub target_version: String,
}

impl EdgeToken {
    /// Creates a new EdgeToken instance.
    pub fn new(
        source_name: impl Into<String>,
        source_version: Option<&str>,
        target_name: impl Into<String>,
        target_version: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            source_version: source_version.map(str::to_string),
            target_name: target_name.into(),
            target_version: target_version.into(),
        }
    }

    /// Returns true if the source is the unversioned main module.
    pub fn is_root(&self) -> bool {
        self.source_version.is_none()
    }
}

impl fmt::Display for EdgeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_version {
            Some(version) => write!(f, "{}@{}", self.source_name, version)?,
            None => write!(f, "{}", self.source_name)?,
        }
        write!(f, " {}@{}", self.target_name, self.target_version)
    }
}
