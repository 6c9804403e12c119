//! Per-file analyzer for Node-style script sources.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::report::NodeFileReport;
use super::routes::find_routes;
use super::{matches_extension, AnalysisError};

/// Analyzes one file for HTTP route registrations.
///
/// Returns `Ok(None)` when the file is not relevant: wrong extension, or no
/// routes registered in it. Read failures propagate as environment errors.
pub fn analyze(file_name: &str, path: &Path) -> Result<Option<NodeFileReport>, AnalysisError> {
    if !matches_extension(file_name, "js") {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;

    let routes = find_routes(&content);
    if routes.is_empty() {
        return Ok(None);
    }
    debug!(file = file_name, count = routes.len(), "routes found");

    Ok(Some(NodeFileReport {
        name: file_name.to_string(),
        at: path.display().to_string(),
        routes,
    }))
}
