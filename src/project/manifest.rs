//! Serde structures for the manifest and workspace files read during
//! project validation.

use serde::Deserialize;
use std::collections::HashMap;

/// The subset of an npm `package.json` that validation looks at.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackageManifest {
    /// Production dependencies declared by the project.
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// Returns true when every name in `required` is declared as a
    /// production dependency.
    pub fn declares_all(&self, required: &[&str]) -> bool {
        required
            .iter()
            .all(|name| self.dependencies.contains_key(*name))
    }
}

/// The subset of an `angular.json` workspace file that validation looks at.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Name of the project the workspace builds by default.
    #[serde(rename = "defaultProject")]
    pub default_project: String,
    /// All projects declared in the workspace.
    pub projects: HashMap<String, ProjectEntry>,
}

/// One project entry inside a workspace file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    /// Directory holding the project's sources, relative to the workspace
    /// root.
    #[serde(rename = "sourceRoot")]
    pub source_root: String,
}
