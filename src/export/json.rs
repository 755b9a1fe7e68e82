//! JSON export implementation.
//!
//! Exports collection results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::collector::{CollectionStats, PackageSet};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    exclude_pattern: &'a str,
    total: usize,
    stats: &'a CollectionStats,
    packages: &'a PackageSet,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            exclude_pattern: &data.exclude_pattern,
            total: data.total(),
            stats: &data.stats,
            packages: &data.packages,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
