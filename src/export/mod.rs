//! Export functionality for collected package sets.
//!
//! This module provides exporters for reporting a collection run in
//! various formats: plain text, JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::collector::{CollectionStats, CollectionSummary, PackageSet};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One package per line followed by `Total: N`
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Substring used to exclude platform packages
    pub exclude_pattern: String,
    /// Qualifying packages
    pub packages: PackageSet,
    /// Counters from the collection run
    pub stats: CollectionStats,
}

impl ExportData {
    /// Create new export data from a finished collection.
    pub fn new(exclude_pattern: impl Into<String>, summary: CollectionSummary) -> Self {
        Self {
            exclude_pattern: exclude_pattern.into(),
            packages: summary.packages,
            stats: summary.stats,
        }
    }

    /// Number of qualifying packages
    pub fn total(&self) -> usize {
        self.packages.len()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_data() -> ExportData {
    use crate::pipeline::Pipeline;

    let summary = Pipeline::new("github.com/golang/")
        .run_lines([
            "example.com/root example.com/dep1@v1.0.0",
            "example.com/dep1@v1.0.0 example.com/dep2@v2.0.0",
            "example.com/dep1@v1.0.0 github.com/golang/x/tools@v0.1.0",
        ])
        .unwrap();
    ExportData::new("github.com/golang/", summary)
}
