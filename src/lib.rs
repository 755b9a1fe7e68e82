//! gomodcount - counts first-party packages in a Go module graph
//!
//! This crate parses `go mod graph` output, drops platform packages by
//! substring match, and reports the distinct module paths that remain.

pub mod collector;
pub mod config;
pub mod export;
pub mod parser;
pub mod pipeline;
pub mod source;
