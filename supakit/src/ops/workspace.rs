//! Workspace operation - bootstrap a new monorepo.

use std::path::Path;

use eyre::{Result, WrapErr, bail};
use supakit_codegen::{Scaffold, WorkspaceGenerator};

use super::run_tool;
use crate::reports::{AppOutcome, WorkspaceReport};

/// Options for the workspace operation.
pub struct WorkspaceOptions<'a> {
    /// Directory the workspace is created in.
    pub parent: &'a Path,
    pub name: String,
    pub git_url: Option<String>,
    /// Scaffold `apps/example` with `yarn create vite`.
    pub with_app: bool,
}

/// Execute the workspace operation.
///
/// Fails without touching the disk when `<parent>/<name>` already exists.
pub fn workspace(opts: WorkspaceOptions) -> Result<WorkspaceReport> {
    let root = opts.parent.join(&opts.name);
    if root.exists() {
        bail!(
            "directory {} already exists. Choose a different name.",
            opts.name
        );
    }

    let result = WorkspaceGenerator::new(&opts.name)
        .with_git_url(opts.git_url)
        .with_app(opts.with_app)
        .generate(&root)
        .wrap_err("failed to write workspace files")?;

    let app = if opts.with_app {
        let apps = root.join("apps");
        std::fs::create_dir_all(&apps)
            .wrap_err_with(|| format!("failed to create {}", apps.display()))?;
        run_tool(
            &apps,
            "yarn",
            &["create", "vite", "example", "--template", "react-ts"],
        )
        .wrap_err("failed to create the example Vite app")?;
        AppOutcome::Created
    } else {
        AppOutcome::NotRequested
    };

    Ok(WorkspaceReport {
        name: opts.name,
        root,
        result,
        app,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_existing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("acme")).unwrap();

        let err = workspace(WorkspaceOptions {
            parent: dir.path(),
            name: "acme".into(),
            git_url: None,
            with_app: false,
        })
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "directory acme already exists. Choose a different name."
        );
        assert_eq!(std::fs::read_dir(dir.path().join("acme")).unwrap().count(), 0);
    }

    #[test]
    fn test_creates_workspace_without_app() {
        let dir = TempDir::new().unwrap();

        let report = workspace(WorkspaceOptions {
            parent: dir.path(),
            name: "acme".into(),
            git_url: None,
            with_app: false,
        })
        .unwrap();

        assert_eq!(report.app, AppOutcome::NotRequested);
        assert_eq!(report.result.written.len(), 9);
        assert!(
            dir.path()
                .join("acme/packages/supabase-core/src/database.service.ts")
                .exists()
        );
        assert!(!dir.path().join("acme/apps").exists());
    }
}
