//! Markdown export implementation.
//!
//! Exports collection results in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# Go Module Dependency Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Excluded pattern:** `{}`", data.exclude_pattern)?;
        writeln!(writer)?;

        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Packages | {} |", data.total())?;
        writeln!(writer, "| Edges | {} |", data.stats.edges)?;
        writeln!(
            writer,
            "| Edges from excluded sources | {} |",
            data.stats.excluded_sources
        )?;
        writeln!(
            writer,
            "| Excluded targets | {} |",
            data.stats.excluded_targets
        )?;
        writeln!(writer)?;

        writeln!(writer, "## Packages")?;
        writeln!(writer)?;
        if data.packages.is_empty() {
            writeln!(writer, "_No packages found._")?;
        } else {
            for name in data.packages.iter() {
                writeln!(writer, "- `{}`", name)?;
            }
        }

        Ok(())
    }
}
