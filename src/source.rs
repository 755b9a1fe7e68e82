//! Where graph lines come from.
//!
//! Either `go mod graph` is run inside a project and its output persisted
//! to a log file, or an existing dump is read from a file or stdin.

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

/// Program invoked to dump the module graph.
pub const GO_BINARY: &str = "go";

/// Arguments passed to [`GO_BINARY`].
pub const GO_MOD_GRAPH_ARGS: [&str; 2] = ["mod", "graph"];

/// Errors raised while obtaining graph input.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The graph command could not be started.
    #[error("Failed to run `{command}` in {dir}: {source}")]
    Spawn {
        command: String,
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The graph command exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Reading or writing a graph file failed.
    #[error("Failed to access {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// A place to read graph lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Run `<go> mod graph` in `dir`, save its output to `logfile`, then read it.
    GoModGraph {
        go: PathBuf,
        dir: PathBuf,
        logfile: PathBuf,
    },
    /// Read a previously saved dump.
    File(PathBuf),
    /// Read the dump from standard input.
    Stdin,
}

impl GraphSource {
    /// Opens the source as a line reader, running the go tool if needed.
    pub fn open(&self) -> SourceResult<Box<dyn BufRead>> {
        match self {
            GraphSource::GoModGraph { go, dir, logfile } => {
                dump_module_graph(go, dir, logfile)?;
                open_file(logfile)
            }
            GraphSource::File(path) => open_file(path),
            GraphSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Runs `<go> mod graph` in `dir` and writes its stdout to `logfile`.
///
/// `go` is looked up on `PATH` unless it is a path itself.
pub fn dump_module_graph(go: &Path, dir: &Path, logfile: &Path) -> SourceResult<()> {
    let command = format!("{} {}", go.display(), GO_MOD_GRAPH_ARGS.join(" "));
    info!(dir = %dir.display(), logfile = %logfile.display(), "running {command}");

    let output = Command::new(go)
        .args(GO_MOD_GRAPH_ARGS)
        .current_dir(dir)
        .output()
        .map_err(|source| SourceError::Spawn {
            command: command.clone(),
            dir: dir.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(SourceError::CommandFailed {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    fs::write(logfile, &output.stdout).map_err(|source| SourceError::File {
        path: logfile.to_path_buf(),
        source,
    })?;
    debug!(bytes = output.stdout.len(), "saved module graph");
    Ok(())
}

fn open_file(path: &Path) -> SourceResult<Box<dyn BufRead>> {
    let file = fs::File::open(path).map_err(|source| SourceError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
