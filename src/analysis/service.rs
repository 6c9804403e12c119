//! Request-level orchestration: project validation, traversal, collection.
//!
//! This is the synchronous core behind the single analyze request a UI
//! issues. A transport layer (HTTP endpoint, CLI) renders the
//! [`AnalyzeResponse`]; rejection becomes the literal `false` on the wire.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::project::{validate_angular_root, validate_node_root};

use super::report::FileReport;
use super::{angular, node};

/// Which file analyzer a request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    Angular,
    Node,
}

impl AnalyzerKind {
    /// Resolves a request selector. Unknown selectors resolve to `None` and
    /// reject the request rather than failing it.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector.to_ascii_uppercase().as_str() {
            "ANGULAR" => Some(AnalyzerKind::Angular),
            "NODE" | "NODEJS" => Some(AnalyzerKind::Node),
            _ => None,
        }
    }

    /// Stable lowercase label for logs and report headers.
    pub fn label(&self) -> &'static str {
        match self {
            AnalyzerKind::Angular => "angular",
            AnalyzerKind::Node => "node",
        }
    }
}

/// One analysis request.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Project root to scan.
    pub source: PathBuf,
    /// Component searched for; required by the Angular analyzer, ignored by
    /// the Node analyzer.
    pub component: Option<String>,
    /// Analyzer selector, matched case-insensitively.
    pub kind: String,
}

/// Outcome of an analysis request.
///
/// `Rejected` covers everything the boundary answers with a flat `false`:
/// an unknown selector, a source path that does not exist, or a root that
/// fails project validation. Environment failures are errors instead and
/// abort the whole request.
#[derive(Debug)]
pub enum AnalyzeResponse {
    Rejected,
    Reports(Vec<FileReport>),
}

/// Handles one analysis request end to end.
///
/// The traversal is depth-first and sorted for deterministic output, and it
/// is all-or-nothing: the first unreadable file or walk error fails the
/// request rather than skipping the file.
pub fn handle_request(request: &AnalyzeRequest) -> anyhow::Result<AnalyzeResponse> {
    let Some(kind) = AnalyzerKind::parse(&request.kind) else {
        warn!(selector = %request.kind, "unknown analyzer selector");
        return Ok(AnalyzeResponse::Rejected);
    };
    if !request.source.exists() {
        warn!(source = %request.source.display(), "source path does not exist");
        return Ok(AnalyzeResponse::Rejected);
    }

    let root = match kind {
        AnalyzerKind::Angular => match validate_angular_root(&request.source)? {
            Some(project) => project.effective_root,
            None => return Ok(AnalyzeResponse::Rejected),
        },
        AnalyzerKind::Node => match validate_node_root(&request.source)? {
            Some(project) => project.effective_root,
            None => return Ok(AnalyzeResponse::Rejected),
        },
    };
    info!(root = %root.display(), kind = kind.label(), "scanning project");

    let mut reports = Vec::new();
    match kind {
        AnalyzerKind::Angular => {
            let component = request
                .component
                .as_deref()
                .context("a component name is required for angular analysis")?;
            for entry in source_files(&root) {
                let (file_name, entry) = entry?;
                if let Some(report) = angular::analyze(&file_name, entry.path(), component)? {
                    reports.push(FileReport::Angular(report));
                }
            }
        }
        AnalyzerKind::Node => {
            for entry in source_files(&root) {
                let (file_name, entry) = entry?;
                if let Some(report) = node::analyze(&file_name, entry.path())? {
                    reports.push(FileReport::Node(report));
                }
            }
        }
    }
    info!(files = reports.len(), "scan finished");

    Ok(AnalyzeResponse::Reports(reports))
}

/// Depth-first, name-sorted walk yielding only files, each paired with its
/// bare file name.
fn source_files(
    root: &std::path::Path,
) -> impl Iterator<Item = anyhow::Result<(String, walkdir::DirEntry)>> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter(|entry| {
            entry
                .as_ref()
                .map(|entry| entry.file_type().is_file())
                .unwrap_or(true)
        })
        .map(move |entry| {
            let entry = entry.with_context(|| format!("walking {}", root.display()))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            debug!(file = %entry.path().display(), "visiting");
            Ok((file_name, entry))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ANGULAR_PACKAGE: &str = r#"{
  "dependencies": {
    "@angular/common": "^17.0.0",
    "@angular/core": "^17.0.0",
    "@angular/compiler": "^17.0.0"
  }
}"#;

    const ANGULAR_CONFIG: &str = r#"{
  "defaultProject": "app",
  "projects": { "app": { "sourceRoot": "src" } }
}"#;

    const HERO_COMPONENT: &str = "\
import { HeroService } from './hero.service';

export class HeroComponent {
  constructor(private heroes: HeroService) {}

  load() {
    this.heroes.fetchAll();
  }
}
";

    fn angular_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), ANGULAR_PACKAGE).unwrap();
        fs::write(dir.path().join("angular.json"), ANGULAR_CONFIG).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/hero.component.ts"), HERO_COMPONENT).unwrap();
        fs::write(dir.path().join("src/unrelated.ts"), "export class Other {}\n").unwrap();
        dir
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let response = handle_request(&AnalyzeRequest {
            source: PathBuf::from("."),
            component: None,
            kind: "python".to_string(),
        })
        .unwrap();
        assert!(matches!(response, AnalyzeResponse::Rejected));
    }

    #[test]
    fn test_missing_source_rejected() {
        let response = handle_request(&AnalyzeRequest {
            source: PathBuf::from("/no/such/path/anywhere"),
            component: Some("X".to_string()),
            kind: "angular".to_string(),
        })
        .unwrap();
        assert!(matches!(response, AnalyzeResponse::Rejected));
    }

    #[test]
    fn test_angular_request_end_to_end() {
        let dir = angular_fixture();
        let response = handle_request(&AnalyzeRequest {
            source: dir.path().to_path_buf(),
            component: Some("HeroService".to_string()),
            kind: "angular".to_string(),
        })
        .unwrap();

        let reports = match response {
            AnalyzeResponse::Reports(reports) => reports,
            AnalyzeResponse::Rejected => panic!("request was rejected"),
        };
        // Only the file importing the component reports; the walk starts at
        // the source root from the project config.
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name(), "hero.component.ts");
        assert_eq!(reports[0].occurrence_count(), 1);
    }

    #[test]
    fn test_angular_request_without_component_fails() {
        let dir = angular_fixture();
        let result = handle_request(&AnalyzeRequest {
            source: dir.path().to_path_buf(),
            component: None,
            kind: "angular".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_non_angular_root_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"dependencies":{}}"#).unwrap();
        fs::write(dir.path().join("angular.json"), ANGULAR_CONFIG).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let response = handle_request(&AnalyzeRequest {
            source: dir.path().to_path_buf(),
            component: Some("HeroService".to_string()),
            kind: "angular".to_string(),
        })
        .unwrap();
        assert!(matches!(response, AnalyzeResponse::Rejected));
    }

    #[test]
    fn test_node_request_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"express": "^4.18.0"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("server.js"),
            "const app = require('express')();\napp.get('/users', listUsers);\n",
        )
        .unwrap();
        fs::write(dir.path().join("helper.js"), "module.exports = 1;\n").unwrap();

        let response = handle_request(&AnalyzeRequest {
            source: dir.path().to_path_buf(),
            component: None,
            kind: "node".to_string(),
        })
        .unwrap();

        let reports = match response {
            AnalyzeResponse::Reports(reports) => reports,
            AnalyzeResponse::Rejected => panic!("request was rejected"),
        };
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name(), "server.js");
    }

    #[test]
    fn test_missing_manifest_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = handle_request(&AnalyzeRequest {
            source: dir.path().to_path_buf(),
            component: None,
            kind: "node".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_analyzer_kind_parse() {
        assert_eq!(AnalyzerKind::parse("angular"), Some(AnalyzerKind::Angular));
        assert_eq!(AnalyzerKind::parse("ANGULAR"), Some(AnalyzerKind::Angular));
        assert_eq!(AnalyzerKind::parse("nodejs"), Some(AnalyzerKind::Node));
        assert_eq!(AnalyzerKind::parse("node"), Some(AnalyzerKind::Node));
        assert_eq!(AnalyzerKind::parse("ruby"), None);
    }
}
