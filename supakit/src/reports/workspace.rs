//! Workspace command report.

use std::path::PathBuf;

use supakit_codegen::GenerateResult;

use super::{
    output::{Output, Report},
    render_written,
};

/// Whether the example Vite app was scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOutcome {
    Created,
    NotRequested,
}

/// Report data from workspace bootstrap.
#[derive(Debug)]
pub struct WorkspaceReport {
    pub name: String,
    pub root: PathBuf,
    pub result: GenerateResult,
    pub app: AppOutcome,
}

impl Report for WorkspaceReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Created workspace", &self.root.display().to_string());
        out.key_value("Core package", &format!("@{}/supabase-core", self.name));
        if self.app == AppOutcome::Created {
            out.key_value("Example app", "apps/example");
        }
        out.newline();

        render_written(out, &self.name, &self.result);

        out.newline();
        out.section("Next steps");
        let mut steps = vec![
            format!("cd {}", self.name),
            "yarn install".to_string(),
            "cd packages/supabase-core && yarn build".to_string(),
        ];
        if self.app == AppOutcome::Created {
            steps.push("cd apps/example && yarn dev".to_string());
        }
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
