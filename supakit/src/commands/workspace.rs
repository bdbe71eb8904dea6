use clap::Args;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use eyre::{Result, WrapErr};
use supakit_config::validate_scope;

use super::{UnwrapOrExit, current_dir};
use crate::{
    ops::{self, workspace::WorkspaceOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct WorkspaceCommand {
    /// Workspace directory name, also used as the npm scope
    #[arg(default_value = "supabase-workspace")]
    pub name: String,

    /// Repository URL for the root package.json
    #[arg(long)]
    pub git_url: Option<String>,

    /// Scaffold an example Vite app in apps/example
    #[arg(long, overrides_with = "no_vite")]
    pub vite: bool,

    /// Skip the example Vite app
    #[arg(long, overrides_with = "vite")]
    pub no_vite: bool,

    /// Accept defaults instead of prompting
    #[arg(short, long)]
    pub yes: bool,
}

impl WorkspaceCommand {
    pub fn run(&self) -> Result<()> {
        validate_scope(&self.name).unwrap_or_exit();

        let git_url = match (&self.git_url, self.yes) {
            (Some(url), _) => Some(url.clone()),
            (None, true) => None,
            (None, false) => Self::prompt_git_url()?,
        };

        let with_app = match (self.vite, self.no_vite, self.yes) {
            (true, _, _) => true,
            (_, true, _) => false,
            (_, _, true) => true,
            _ => Self::prompt_vite()?,
        };

        let report = ops::workspace(WorkspaceOptions {
            parent: &current_dir()?,
            name: self.name.clone(),
            git_url,
            with_app,
        })?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn prompt_git_url() -> Result<Option<String>> {
        let url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Git repository URL (leave empty to skip)")
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read repository URL")?;

        let url = url.trim();
        Ok((!url.is_empty()).then(|| url.to_string()))
    }

    fn prompt_vite() -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Create an example Vite app?")
            .default(true)
            .interact()
            .wrap_err("Failed to read Vite choice")
    }
}
