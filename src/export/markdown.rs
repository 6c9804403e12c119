//! Markdown export implementation.

use super::{ExportData, Exporter};
use crate::analysis::FileReport;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        match data.component.as_deref() {
            Some(component) => writeln!(writer, "# Usages of `{}`", component)?,
            None => writeln!(writer, "# Route registrations")?,
        }
        writeln!(writer)?;
        writeln!(writer, "- Source: `{}`", data.source)?;
        writeln!(writer, "- Analyzer: {}", data.kind)?;
        writeln!(
            writer,
            "- {} occurrence(s) across {} file(s)",
            data.occurrence_count(),
            data.file_count()
        )?;

        for file in &data.files {
            writeln!(writer)?;
            match file {
                FileReport::Angular(report) => {
                    writeln!(writer, "## {}", report.name)?;
                    writeln!(writer)?;
                    writeln!(writer, "`{}`", report.at)?;
                    for class in &report.classes {
                        writeln!(writer)?;
                        writeln!(
                            writer,
                            "### {} (as `{}`)",
                            class.class_name, class.referenced_as
                        )?;
                        writeln!(writer)?;
                        if class.implementations.is_empty() {
                            writeln!(writer, "_Injected but never called._")?;
                        }
                        for usage in &class.implementations {
                            writeln!(writer, "- L{}: `{}`", usage.line, usage.implementation)?;
                        }
                    }
                }
                FileReport::Node(report) => {
                    writeln!(writer, "## {}", report.name)?;
                    writeln!(writer)?;
                    writeln!(writer, "`{}`", report.at)?;
                    writeln!(writer)?;
                    for route in &report.routes {
                        writeln!(writer, "- L{}: `{}`", route.line, route.implementation)?;
                    }
                }
            }
        }
        Ok(())
    }
}
