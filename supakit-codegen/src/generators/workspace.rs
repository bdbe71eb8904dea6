//! A new Yarn monorepo with a shared `supabase-core` package.

use supakit_core::GeneratedFile;

use crate::{
    files::workspace::{
        CoreIndex, CorePackageJson, CoreTsConfig, DatabaseService, DatabaseTypes, Readme,
        RootPackageJson, ViteEnv, YarnLock,
    },
    scaffold::Scaffold,
};

/// Files of a workspace named `name`, written relative to the workspace root.
///
/// The package scope is the workspace name, so the core package is
/// published as `@<name>/supabase-core`.
pub struct WorkspaceGenerator {
    name: String,
    git_url: Option<String>,
    with_app: bool,
}

impl WorkspaceGenerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            git_url: None,
            with_app: false,
        }
    }

    pub fn with_git_url(mut self, url: Option<String>) -> Self {
        self.git_url = url.filter(|url| !url.trim().is_empty());
        self
    }

    /// Whether an example app is created under `apps/example`.
    pub fn with_app(mut self, with_app: bool) -> Self {
        self.with_app = with_app;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Scaffold for WorkspaceGenerator {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(YarnLock),
            Box::new(
                RootPackageJson::new(&self.name)
                    .with_repository(self.git_url.clone())
                    .with_app(self.with_app),
            ),
            Box::new(Readme::new(&self.name, self.with_app)),
            Box::new(CorePackageJson::new(&self.name)),
            Box::new(CoreTsConfig),
            Box::new(DatabaseTypes),
            Box::new(ViteEnv),
            Box::new(DatabaseService),
            Box::new(CoreIndex),
        ]
    }
}
