//! Per-file analyzer for Angular-style typed sources.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::parser::{imports_component, parse_imports, tokenize_classes};

use super::report::{AngularFileReport, ClassUsageReport};
use super::usages::find_usages;
use super::{matches_extension, AnalysisError};

/// Analyzes one file for classes that receive `component` through
/// constructor injection.
///
/// Returns `Ok(None)` when the file is not relevant: wrong extension, or no
/// import naming the component. Once the import check passes a report is
/// always produced, even when no class actually injects the component - the
/// consuming layer distinguishes "imports it" from "uses it" with the empty
/// `classes` list.
///
/// Read failures are environment errors and propagate; the caller treats
/// them as fatal for the whole traversal.
pub fn analyze(
    file_name: &str,
    path: &Path,
    component: &str,
) -> Result<Option<AngularFileReport>, AnalysisError> {
    if !matches_extension(file_name, "ts") {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;

    let imports = parse_imports(&content);
    if !imports_component(&imports, component) {
        return Ok(None);
    }
    debug!(file = file_name, component, "component imported, scanning classes");

    let mut classes = Vec::new();
    for class in tokenize_classes(&content) {
        let injected = match class.injection_of(component) {
            Some(parameter) => parameter.reference.clone(),
            None => continue,
        };
        let implementations = find_usages(&class, &injected, &content)?;
        classes.push(ClassUsageReport {
            class_name: class.name.clone(),
            referenced_as: injected,
            implementations,
        });
    }

    Ok(Some(AngularFileReport {
        name: file_name.to_string(),
        at: path.display().to_string(),
        classes,
    }))
}
