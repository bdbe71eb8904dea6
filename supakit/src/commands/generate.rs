use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use supakit_codegen::ApiOptions;
use supakit_schema::{Diagnostic, TypesSource};

use super::{GlobalArgs, UnwrapOrExit, current_dir, resolve_scope};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Types file from `supabase gen types typescript` (defaults to [generate].types)
    pub types: Option<PathBuf>,

    /// Output directory (defaults to src/lib/api)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// npm scope of the workspace packages (defaults to the workspace directory name)
    #[arg(long)]
    pub scope: Option<String>,

    /// Only read the named schema, e.g. `public`
    #[arg(long)]
    pub schema: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();

        let types = self
            .types
            .clone()
            .or_else(|| config.generate.types.clone())
            .ok_or_else(|| eyre!("no types file given; pass one or set [generate].types"))?;

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let source = TypesSource::open_or_report(&types, &mut diagnostics).unwrap_or_exit();

        let scope = resolve_scope(self.scope.as_deref(), &config, &current_dir()?)?;
        let output_dir = self.output.clone().unwrap_or_else(|| config.output());

        let report = ops::generate(
            &source,
            diagnostics,
            GenerateOptions {
                output_dir: &output_dir,
                schema: self.schema.clone().or_else(|| config.generate.schema.clone()),
                api: ApiOptions {
                    workspace_scope: scope,
                    types_module: config.types_module().to_string(),
                    client_module: config.client_module().to_string(),
                },
                dry_run: self.dry_run,
                verbose: global.verbose,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
