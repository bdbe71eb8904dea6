//! Core utilities and types for the supakit scaffolding toolkit.
//!
//! This crate provides the generated-file abstraction and the naming helpers
//! shared by the schema extractor, the generators and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{is_identifier, to_camel_case, to_pascal_case};
