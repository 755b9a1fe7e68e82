//! Parser module for gomodcount.
//!
//! Turns the line-oriented output of `go mod graph` into [`EdgeToken`]s.
//!
//! # Example
//!
//! ```
//! use gomodcount::parser::parse_edge;
//!
//! let edge = parse_edge("example.com/app github.com/pkg/errors@v0.9.1").unwrap();
//! assert!(edge.is_root());
//! assert_eq!(edge.target_name, "github.com/pkg/errors");
//! ```

pub mod edge;
pub mod types;

// Re-export commonly used types for convenience
pub use edge::{parse_edge, EdgeError, EdgeResult};

pub use types::EdgeToken;
