//! Package collection over parsed graph edges.
//!
//! The [`PackageCollector`] folds [`EdgeToken`]s into a [`PackageSet`],
//! skipping every package whose module path contains the exclusion
//! pattern.
//!
//! # Example
//!
//! ```rust
//! use gomodcount::collector::PackageCollector;
//! use gomodcount::parser::parse_edge;
//!
//! let mut collector = PackageCollector::new("github.com/golang/");
//! collector.observe(&parse_edge("example.com/app example.com/lib@v1.0.0").unwrap());
//! collector.observe(&parse_edge("example.com/lib@v1.0.0 github.com/golang/protobuf@v1.5.2").unwrap());
//!
//! let summary = collector.finish();
//! assert_eq!(summary.packages.len(), 2);
//! ```

mod package_set;

pub use package_set::PackageSet;

use serde::Serialize;
use tracing::trace;

use crate::parser::EdgeToken;

/// Module path prefix of packages treated as platform code.
pub const DEFAULT_EXCLUDE_PATTERN: &str = "github.com/golang/";

/// Counters gathered while collecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    /// Edges observed.
    pub edges: usize,
    /// Edges dropped because their source matched the exclusion pattern.
    pub excluded_sources: usize,
    /// Edges whose source qualified but whose target was excluded.
    pub excluded_targets: usize,
}

/// Final result of a collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Qualifying package names.
    pub packages: PackageSet,
    /// Counters for the run.
    pub stats: CollectionStats,
}

impl CollectionSummary {
    /// Number of distinct qualifying packages.
    pub fn total(&self) -> usize {
        self.packages.len()
    }
}

/// Accumulates qualifying package names across edges.
#[derive(Debug, Clone)]
pub struct PackageCollector {
    exclude: String,
    packages: PackageSet,
    stats: CollectionStats,
}

impl PackageCollector {
    /// Creates a collector that skips names containing `exclude`.
    pub fn new(exclude: impl Into<String>) -> Self {
        Self {
            exclude: exclude.into(),
            packages: PackageSet::new(),
            stats: CollectionStats::default(),
        }
    }

    /// The exclusion pattern in use.
    pub fn exclude_pattern(&self) -> &str {
        &self.exclude
    }

    /// Returns true if `name` does not contain the exclusion pattern.
    pub fn qualifies(&self, name: &str) -> bool {
        !name.contains(self.exclude.as_str())
    }

    /// Folds one edge into the set.
    ///
    /// The target is only considered when the source qualifies, so a
    /// package reached solely through excluded modules is never counted.
    pub fn observe(&mut self, edge: &EdgeToken) {
        self.stats.edges += 1;

        if !self.qualifies(&edge.source_name) {
            self.stats.excluded_sources += 1;
            trace!(source = %edge.source_name, "skipping edge from excluded source");
            return;
        }
        if self.packages.insert(&edge.source_name) {
            trace!(package = %edge.source_name, "added package");
        }

        if !self.qualifies(&edge.target_name) {
            self.stats.excluded_targets += 1;
            return;
        }
        if self.packages.insert(&edge.target_name) {
            trace!(package = %edge.target_name, "added package");
        }
    }

    /// Read-only view of the names collected so far.
    pub fn packages(&self) -> &PackageSet {
        &self.packages
    }

    /// Counters gathered so far.
    pub fn stats(&self) -> CollectionStats {
        self.stats
    }

    /// Consumes the collector, returning the final set and counters.
    pub fn finish(self) -> CollectionSummary {
        CollectionSummary {
            packages: self.packages,
            stats: self.stats,
        }
    }
}

impl Default for PackageCollector {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PATTERN)
    }
}

impl<'a> Extend<&'a EdgeToken> for PackageCollector {
    fn extend<I: IntoIterator<Item = &'a EdgeToken>>(&mut self, iter: I) {
        for edge in iter {
            self.observe(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_edge;

    fn collect(lines: &[&str], exclude: &str) -> CollectionSummary {
        let mut collector = PackageCollector::new(exclude);
        for line in lines {
            collector.observe(&parse_edge(line).unwrap());
        }
        collector.finish()
    }

    fn names(summary: &CollectionSummary) -> Vec<&str> {
        summary.packages.iter().collect()
    }

    #[test]
    fn test_version_insensitive_dedup() {
        let summary = collect(&["a@1.0 b@1.0", "a@2.0 b@1.0"], DEFAULT_EXCLUDE_PATTERN);
        assert_eq!(names(&summary), vec!["a", "b"]);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_excluded_source_gates_target() {
        let summary = collect(
            &["github.com/golang/x/net@v1 example.com/foo@v1"],
            "github.com/golang/",
        );
        assert!(summary.packages.is_empty());
        assert_eq!(summary.stats.excluded_sources, 1);
    }

    #[test]
    fn test_gated_target_counted_through_other_edge() {
        let summary = collect(
            &[
                "github.com/golang/x/net@v1 example.com/foo@v1",
                "example.com/foo@v1 example.com/bar@v1",
            ],
            "github.com/golang/",
        );
        assert_eq!(names(&summary), vec!["example.com/bar", "example.com/foo"]);
    }

    #[test]
    fn test_excluded_target_keeps_source() {
        let summary = collect(
            &["example.com/app github.com/golang/protobuf@v1.5.2"],
            "github.com/golang/",
        );
        assert_eq!(names(&summary), vec!["example.com/app"]);
        assert_eq!(summary.stats.excluded_targets, 1);
    }

    #[test]
    fn test_root_source_and_target_added() {
        let summary = collect(&["example.com/mod example.com/dep@v1.2.3"], "github.com/golang/");
        assert_eq!(names(&summary), vec!["example.com/dep", "example.com/mod"]);
    }

    #[test]
    fn test_pattern_matches_anywhere_in_name() {
        let summary = collect(&["a@v1 mirror/github.com/golang/mock@v1"], "github.com/golang/");
        assert_eq!(names(&summary), vec!["a"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let summary = collect(
            &[
                "example.com/root example.com/dep1@v1.0.0",
                "example.com/dep1@v1.0.0 example.com/dep2@v2.0.0",
                "example.com/dep1@v1.0.0 github.com/golang/x/tools@v0.1.0",
            ],
            "github.com/golang/",
        );
        assert_eq!(
            names(&summary),
            vec!["example.com/dep1", "example.com/dep2", "example.com/root"]
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(
            summary.stats,
            CollectionStats {
                edges: 3,
                excluded_sources: 0,
                excluded_targets: 1,
            }
        );
    }

    #[test]
    fn test_collection_is_idempotent() {
        let lines = [
            "example.com/root example.com/dep1@v1.0.0",
            "github.com/golang/x@v1 example.com/dep9@v1",
            "example.com/dep1@v1.0.0 example.com/dep2@v2.0.0",
        ];
        let first = collect(&lines, "github.com/golang/");
        let second = collect(&lines, "github.com/golang/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_extend_matches_observe() {
        let edges: Vec<EdgeToken> = ["a b@1", "b@1 c@2"]
            .iter()
            .map(|l| parse_edge(l).unwrap())
            .collect();

        let mut collector = PackageCollector::default();
        collector.extend(&edges);
        assert_eq!(collector.packages().len(), 3);
        assert_eq!(collector.stats().edges, 2);
    }

    #[test]
    fn test_default_pattern() {
        let collector = PackageCollector::default();
        assert_eq!(collector.exclude_pattern(), "github.com/golang/");
        assert!(!collector.qualifies("github.com/golang/mock"));
        assert!(collector.qualifies("golang.org/x/net"));
    }
}
