//! File analyzers and the request-level orchestration built on them.
//!
//! Two per-file analyzers are provided:
//!
//! - **angular** - finds classes that receive a named component through
//!   constructor injection and lists every call made through the injected
//!   reference
//! - **node** - finds HTTP route registrations
//!
//! Both return `Ok(None)` for files that are simply not relevant; only
//! environment failures (unreadable files) surface as errors. The
//! [`service`] submodule drives a whole project traversal and applies the
//! all-or-nothing failure rule: the first environment error aborts the
//! request.

use std::ffi::OsStr;
use std::path::Path;

use thiserror::Error;

pub mod angular;
pub mod node;
pub mod report;
pub mod routes;
pub mod service;
pub mod usages;

// Re-export main types for convenience
pub use report::{
    AngularFileReport, ClassUsageReport, FileReport, NodeFileReport, RouteOccurrence,
    UsageOccurrence,
};
pub use routes::find_routes;
pub use service::{handle_request, AnalyzeRequest, AnalyzeResponse, AnalyzerKind};
pub use usages::find_usages;

/// Errors that can occur while analyzing a single file.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    /// A scan pattern could not be compiled.
    #[error("Failed to compile scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Returns true when `file_name` carries `expected` as its extension,
/// compared case-insensitively.
pub(crate) fn matches_extension(file_name: &str, expected: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .map(|extension| extension.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}
