//! Project-root validation.
//!
//! Before a traversal starts, the requested root must look like a project of
//! the selected flavor, and the flavor may redirect the walk to a source
//! subdirectory. Validation failures split two ways: a root that simply is
//! not such a project yields `Ok(None)` (the request is answered with
//! `false`), while missing or unparseable project files are environment
//! failures that abort the request.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::manifest::{PackageManifest, WorkspaceConfig};

/// Framework packages an Angular project must declare.
const ANGULAR_CORE_DEPS: [&str; 3] = ["@angular/common", "@angular/core", "@angular/compiler"];

/// Package a Node server project must declare.
const NODE_CORE_DEPS: [&str; 1] = ["express"];

/// Errors raised while validating a project root.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A project file could not be read.
    #[error("Failed to read project file: {0}")]
    FileRead(#[from] std::io::Error),

    /// A project file could not be parsed.
    #[error("Failed to parse project file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The workspace file names a default project it does not declare.
    #[error("Workspace declares no project named '{0}'")]
    MissingProject(String),
}

/// A validated project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    /// Directory the file walk should actually start from.
    pub effective_root: PathBuf,
}

/// Validates `root` as an Angular workspace.
///
/// Reads `package.json` for the framework dependencies and `angular.json`
/// for the default project's source root; the effective root is the source
/// root joined onto `root`. Both files are read before the dependency
/// verdict is made, so a broken workspace file surfaces as an error even
/// when the dependencies are absent.
pub fn validate_angular_root(root: &Path) -> Result<Option<ProjectRoot>, ValidationError> {
    let manifest = read_manifest(root)?;

    let config: WorkspaceConfig =
        serde_json::from_str(&fs::read_to_string(root.join("angular.json"))?)?;
    let project = config
        .projects
        .get(&config.default_project)
        .ok_or_else(|| ValidationError::MissingProject(config.default_project.clone()))?;
    let effective_root = root.join(&project.source_root);

    if !manifest.declares_all(&ANGULAR_CORE_DEPS) {
        debug!(root = %root.display(), "angular framework dependencies not declared");
        return Ok(None);
    }
    Ok(Some(ProjectRoot { effective_root }))
}

/// Validates `root` as a Node server project.
///
/// Only the manifest is consulted; there is no workspace file, so the
/// effective root is the root itself.
pub fn validate_node_root(root: &Path) -> Result<Option<ProjectRoot>, ValidationError> {
    let manifest = read_manifest(root)?;
    if !manifest.declares_all(&NODE_CORE_DEPS) {
        debug!(root = %root.display(), "express not declared");
        return Ok(None);
    }
    Ok(Some(ProjectRoot {
        effective_root: root.to_path_buf(),
    }))
}

fn read_manifest(root: &Path) -> Result<PackageManifest, ValidationError> {
    let content = fs::read_to_string(root.join("package.json"))?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGULAR_PACKAGE: &str = r#"{
        "dependencies": {
            "@angular/common": "^17.0.0",
            "@angular/core": "^17.0.0",
            "@angular/compiler": "^17.0.0"
        }
    }"#;

    const ANGULAR_CONFIG: &str = r#"{
        "defaultProject": "app",
        "projects": {"app": {"sourceRoot": "src"}}
    }"#;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_valid_angular_root() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", ANGULAR_PACKAGE);
        write(&dir, "angular.json", ANGULAR_CONFIG);

        let project = validate_angular_root(dir.path()).unwrap().unwrap();
        assert_eq!(project.effective_root, dir.path().join("src"));
    }

    #[test]
    fn test_angular_root_missing_framework_deps() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", r#"{"dependencies": {"react": "^18.0.0"}}"#);
        write(&dir, "angular.json", ANGULAR_CONFIG);

        assert!(validate_angular_root(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_angular_root_missing_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "angular.json", ANGULAR_CONFIG);

        assert!(matches!(
            validate_angular_root(dir.path()),
            Err(ValidationError::FileRead(_))
        ));
    }

    #[test]
    fn test_angular_root_missing_workspace_file_is_error() {
        // The workspace file is read even though the dependencies alone
        // would already disqualify the root.
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", r#"{"dependencies": {}}"#);

        assert!(matches!(
            validate_angular_root(dir.path()),
            Err(ValidationError::FileRead(_))
        ));
    }

    #[test]
    fn test_angular_root_malformed_workspace_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", ANGULAR_PACKAGE);
        write(&dir, "angular.json", "{ not json");

        assert!(matches!(
            validate_angular_root(dir.path()),
            Err(ValidationError::Parse(_))
        ));
    }

    #[test]
    fn test_angular_root_unknown_default_project_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", ANGULAR_PACKAGE);
        write(
            &dir,
            "angular.json",
            r#"{"defaultProject": "ghost", "projects": {"app": {"sourceRoot": "src"}}}"#,
        );

        assert!(matches!(
            validate_angular_root(dir.path()),
            Err(ValidationError::MissingProject(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_valid_node_root() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", r#"{"dependencies": {"express": "^4.18.0"}}"#);

        let project = validate_node_root(dir.path()).unwrap().unwrap();
        assert_eq!(project.effective_root, dir.path());
    }

    #[test]
    fn test_node_root_without_express() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "package.json", r#"{"dependencies": {"fastify": "^4.0.0"}}"#);

        assert!(validate_node_root(dir.path()).unwrap().is_none());
    }
}
