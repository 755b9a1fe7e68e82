//! Parser for single `go mod graph` lines.
//!
//! Each line has the shape `source[@version] target@version`. The source
//! may omit its version (the main module); the target never does.

use super::types::EdgeToken;

/// Errors that can occur while parsing a graph edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeError {
    /// The line did not contain exactly two whitespace-separated fields.
    #[error("Malformed edge: expected 2 fields, found {found}")]
    FieldCount { found: usize },

    /// The target field did not contain exactly one `@`.
    #[error("Malformed edge: target must contain exactly one '@', found {delimiters}")]
    TargetVersion { delimiters: usize },

    /// A module path was empty.
    #[error("Malformed edge: empty {field} module path")]
    EmptyName { field: &'static str },
}

/// Result type alias for edge parsing.
pub type EdgeResult<T> = Result<T, EdgeError>;

/// Parses one line of graph output into an [`EdgeToken`].
///
/// # Example
///
/// ```
/// use gomodcount::parser::parse_edge;
///
/// let edge = parse_edge("example.com/mod example.com/dep@v1.2.3").unwrap();
/// assert_eq!(edge.source_version, None);
/// assert_eq!(edge.target_version, "v1.2.3");
/// ```
pub fn parse_edge(line: &str) -> EdgeResult<EdgeToken> {
    let mut fields = line.split_whitespace();
    let (source, target) = match (fields.next(), fields.next(), fields.next()) {
        (Some(source), Some(target), None) => (source, target),
        _ => {
            return Err(EdgeError::FieldCount {
                found: line.split_whitespace().count(),
            })
        }
    };

    let (source_name, source_version) = match source.split_once('@') {
        Some((name, version)) => (name, Some(version)),
        None => (source, None),
    };

    let delimiters = target.matches('@').count();
    if delimiters != 1 {
        return Err(EdgeError::TargetVersion { delimiters });
    }
    // Exactly one '@' was counted above.
    let (target_name, target_version) = target
        .split_once('@')
        .ok_or(EdgeError::TargetVersion { delimiters })?;

    if source_name.is_empty() {
        return Err(EdgeError::EmptyName { field: "source" });
    }
    if target_name.is_empty() {
        return Err(EdgeError::EmptyName { field: "target" });
    }

    Ok(EdgeToken::new(
        source_name,
        source_version,
        target_name,
        target_version,
    ))
}
