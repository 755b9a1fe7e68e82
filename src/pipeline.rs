//! Line-by-line driver tying the parser to the collector.
//!
//! A run either consumes every line and yields a [`CollectionSummary`], or
//! stops at the first malformed line. Nothing partial is returned on error.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::collector::{CollectionSummary, PackageCollector};
use crate::parser::{parse_edge, EdgeError};

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A line could not be parsed as a graph edge.
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: EdgeError,
    },

    /// Reading the input failed.
    #[error("Failed to read graph input: {0}")]
    Io(#[from] std::io::Error),

    /// The run was cancelled before the given line.
    #[error("Cancelled before line {line}")]
    Cancelled { line: usize },
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Parses graph lines and collects qualifying packages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    exclude: String,
    cancel: Option<Arc<AtomicBool>>,
}

impl Pipeline {
    /// Creates a pipeline using `exclude` as the exclusion pattern.
    pub fn new(exclude: impl Into<String>) -> Self {
        Self {
            exclude: exclude.into(),
            cancel: None,
        }
    }

    /// Installs a flag checked before each line; setting it stops the run.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Runs over in-memory lines.
    ///
    /// # Example
    ///
    /// ```
    /// use gomodcount::pipeline::Pipeline;
    ///
    /// let summary = Pipeline::new("github.com/golang/")
    ///     .run_lines(["example.com/app example.com/lib@v1.0.0"])
    ///     .unwrap();
    /// assert_eq!(summary.total(), 2);
    /// ```
    pub fn run_lines<'a, I>(&self, lines: I) -> PipelineResult<CollectionSummary>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.run_results(lines.into_iter().map(|l| Ok::<_, std::io::Error>(l.to_string())))
    }

    /// Runs over a buffered reader, one edge per line.
    pub fn run_reader<R: BufRead>(&self, reader: R) -> PipelineResult<CollectionSummary> {
        self.run_results(reader.lines())
    }

    /// Runs over a multi-line string.
    pub fn run_str(&self, content: &str) -> PipelineResult<CollectionSummary> {
        self.run_lines(content.lines())
    }

    fn run_results<I>(&self, lines: I) -> PipelineResult<CollectionSummary>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut collector = PackageCollector::new(self.exclude.as_str());

        for (index, line) in lines.into_iter().enumerate() {
            let line_no = index + 1;
            if self.is_cancelled() {
                warn!(line = line_no, "graph collection cancelled");
                return Err(PipelineError::Cancelled { line: line_no });
            }

            let line = line?;
            let edge = parse_edge(&line).map_err(|source| {
                debug!(line = line_no, content = %line, "rejecting malformed edge");
                PipelineError::Malformed {
                    line: line_no,
                    source,
                }
            })?;
            collector.observe(&edge);
        }

        let summary = collector.finish();
        info!(
            packages = summary.total(),
            edges = summary.stats.edges,
            excluded_sources = summary.stats.excluded_sources,
            excluded_targets = summary.stats.excluded_targets,
            "collected packages"
        );
        Ok(summary)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(crate::collector::DEFAULT_EXCLUDE_PATTERN)
    }
}
