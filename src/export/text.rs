//! Plain text export.
//!
//! One package per line in sorted order, then a `Total: N` line.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        for name in data.packages.iter() {
            writeln!(writer, "{}", name)?;
        }
        writeln!(writer, "Total: {}", data.total())
    }
}
