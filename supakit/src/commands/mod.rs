mod completions;
mod extract;
mod generate;
mod stripe;
mod workspace;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr};
use extract::ExtractCommand;
use generate::GenerateCommand;
use stripe::StripeCommand;
use supakit_config::{CONFIG_FILE, Config, discover_scope, validate_scope};
use workspace::WorkspaceCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for supakit_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for supakit_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "supakit")]
#[command(version)]
#[command(about = "Scaffold typed Supabase services, Stripe edge functions and workspaces")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.global),
            Commands::Extract(cmd) => cmd.run(&self.global),
            Commands::Stripe(cmd) => cmd.run(&self.global),
            Commands::Workspace(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

/// Flags shared by every subcommand.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to supakit.toml (defaults to ./supakit.toml when it exists)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also print informational diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load the project config. An explicitly passed file must exist.
    pub fn load_config(&self) -> Config {
        match &self.config {
            Some(path) => Config::load(path, true).unwrap_or_exit(),
            None => Config::load(CONFIG_FILE, false).unwrap_or_exit(),
        }
    }
}

/// npm scope for generated imports: flag, then config, then the name of the
/// enclosing workspace (or current directory).
pub(crate) fn resolve_scope(flag: Option<&str>, config: &Config, cwd: &Path) -> Result<String> {
    let scope = match flag.or(config.project.scope.as_deref()) {
        Some(scope) => scope.to_string(),
        None => discover_scope(cwd)
            .ok_or_else(|| eyre::eyre!("could not determine a workspace scope; pass --scope"))?,
    };
    validate_scope(&scope).unwrap_or_exit();
    Ok(scope)
}

pub(crate) fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().wrap_err("Failed to get current directory")
}

#[derive(Subcommand)]
enum Commands {
    /// Generate per-table types and services from a Supabase types file
    Generate(GenerateCommand),

    /// Print the tables, views and relationships found in a types file
    Extract(ExtractCommand),

    /// Scaffold Stripe edge functions and the client Stripe service
    Stripe(StripeCommand),

    /// Create a new Yarn workspace with a supabase-core package
    Workspace(WorkspaceCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
