//! Project configuration for supakit.
//!
//! Every setting can also be passed on the command line; `supakit.toml` only
//! saves retyping them. All keys are optional:
//!
//! ```toml
//! [project]
//! scope = "my-workspace"
//!
//! [generate]
//! types = "src/database.types.ts"
//! output = "src/lib/api"
//! schema = "public"
//! types_module = "../../../types"
//! client_module = "../../../client"
//!
//! [stripe]
//! target = "."
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod scope;

pub use config::{
    CONFIG_FILE, Config, DEFAULT_CLIENT_MODULE, DEFAULT_OUTPUT, DEFAULT_TYPES_MODULE,
    GenerateConfig, ProjectConfig, StripeConfig,
};
pub use error::{Error, Result};
pub use scope::{discover_scope, find_workspace_root, validate_scope};
