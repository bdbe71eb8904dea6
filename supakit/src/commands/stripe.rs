use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{GlobalArgs, current_dir, resolve_scope};
use crate::{
    ops::{self, stripe::StripeOptions},
    reports::{Report, TerminalOutput},
};

/// Fallback target when neither the argument nor `[stripe].target` is set.
const TARGET_ENV: &str = "STRIPE_TARGET_DIR";

#[derive(Args)]
pub struct StripeCommand {
    /// Project root to scaffold into (defaults to $STRIPE_TARGET_DIR or .)
    pub target: Option<PathBuf>,

    /// npm scope for `@<scope>/stripe-core` (defaults to the workspace directory name)
    #[arg(long)]
    pub scope: Option<String>,

    /// Do not run `npx supabase init` when supabase/ is missing
    #[arg(long)]
    pub skip_init: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl StripeCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();

        let target = self
            .target
            .clone()
            .or_else(|| config.stripe.target.clone())
            .or_else(|| std::env::var_os(TARGET_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        let absolute = current_dir()?.join(&target);
        let scope = resolve_scope(self.scope.as_deref(), &config, &absolute)?;

        let report = ops::stripe(StripeOptions {
            target: &target,
            scope,
            skip_init: self.skip_init,
            dry_run: self.dry_run,
        })?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
