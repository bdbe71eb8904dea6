//! Workspace scope discovery.
//!
//! Generated services import `@<scope>/supabase-core`. Unless configured, the
//! scope is the name of the enclosing yarn workspace directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Deserialize)]
struct PackageJson {
    workspaces: Option<serde_json::Value>,
}

/// Nearest ancestor of `start` (inclusive) whose `package.json` declares `workspaces`.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
        let package: PackageJson = serde_json::from_str(&content).ok()?;
        package.workspaces.map(|_| dir.to_path_buf())
    })
}

/// Scope for packages under `start`: the workspace root's directory name,
/// or `start`'s own name outside a workspace.
pub fn discover_scope(start: &Path) -> Option<String> {
    let root = find_workspace_root(start).unwrap_or_else(|| start.to_path_buf());
    root.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Check that `scope` can appear as `@<scope>/<package>`.
pub fn validate_scope(scope: &str) -> Result<()> {
    let reason = if scope.is_empty() {
        Some("scope is empty")
    } else if scope.starts_with('@') {
        Some("scope must not include the leading '@'")
    } else if scope.contains('/') {
        Some("scope must not contain '/'")
    } else if scope.chars().any(char::is_whitespace) {
        Some("scope must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Box::new(Error::InvalidScope {
            scope: scope.to_string(),
            reason: reason.to_string(),
        })),
        None => Ok(()),
    }
}
