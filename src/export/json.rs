//! JSON export implementation.
//!
//! The `files` array carries the per-file reports in the exact shape the UI
//! layer consumes; the surrounding request/summary envelope is for any other
//! machine consumer.

use super::{ExportData, Exporter};
use crate::analysis::FileReport;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Request echo for JSON output.
#[derive(Serialize)]
struct JsonRequest<'a> {
    source: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<&'a str>,
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    occurrences: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    request: JsonRequest<'a>,
    summary: JsonSummary,
    files: &'a [FileReport],
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            request: JsonRequest {
                source: &data.source,
                kind: &data.kind,
                component: data.component.as_deref(),
            },
            summary: JsonSummary {
                files: data.file_count(),
                occurrences: data.occurrence_count(),
            },
            files: &data.files,
        };

        serde_json::to_writer_pretty(&mut *writer, &export)?;
        writeln!(writer)
    }
}
