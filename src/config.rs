//! Run configuration resolved from command-line arguments.

use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::source::{GraphSource, GO_BINARY};

/// Default file the module graph is persisted to.
pub const DEFAULT_LOGFILE: &str = "dependencies.log";

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where graph lines are read from.
    pub source: GraphSource,
    /// Substring marking platform packages.
    pub exclude: String,
    /// Report format written to stdout.
    pub format: ExportFormat,
}

impl Config {
    /// Builds a config that runs `go mod graph` in `dir`.
    ///
    /// Both paths have a leading `~` expanded to the home directory.
    pub fn for_project(dir: &Path, logfile: &Path, exclude: impl Into<String>) -> Self {
        Self {
            source: GraphSource::GoModGraph {
                go: PathBuf::from(GO_BINARY),
                dir: expand_home(dir),
                logfile: expand_home(logfile),
            },
            exclude: exclude.into(),
            format: ExportFormat::default(),
        }
    }

    /// Builds a config that reads a saved dump; `-` means stdin.
    pub fn for_input(input: &Path, exclude: impl Into<String>) -> Self {
        let source = if input == Path::new("-") {
            GraphSource::Stdin
        } else {
            GraphSource::File(expand_home(input))
        };
        Self {
            source,
            exclude: exclude.into(),
            format: ExportFormat::default(),
        }
    }

    /// Sets the report format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Uses `go` instead of the `go` found on `PATH`. No effect on saved dumps.
    pub fn with_go_binary(mut self, go: &Path) -> Self {
        if let GraphSource::GoModGraph { go: current, .. } = &mut self.source {
            *current = expand_home(go);
        }
        self
    }
}

/// Expands a leading `~` component using `$HOME`.
///
/// Only the current user's home is resolved; `~user/...` and every other
/// path are returned as is.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
