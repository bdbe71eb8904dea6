use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use supakit_schema::{Diagnostic, ExtractOptions, TypesSource};

use super::{GlobalArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExtractCommand {
    /// Types file from `supabase gen types typescript` (defaults to [generate].types)
    pub types: Option<PathBuf>,

    /// Only read the named schema, e.g. `public`
    #[arg(long)]
    pub schema: Option<String>,

    /// Print both maps as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExtractCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();

        let types = self
            .types
            .clone()
            .or_else(|| config.generate.types.clone())
            .ok_or_else(|| eyre!("no types file given; pass one or set [generate].types"))?;

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let source = TypesSource::open_or_report(&types, &mut diagnostics).unwrap_or_exit();

        let options = ExtractOptions {
            schema: self.schema.clone().or_else(|| config.generate.schema.clone()),
        };
        let report = ops::extract(&source, diagnostics, &options, self.json, global.verbose)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
