use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("types file not found at '{path}'")]
    #[diagnostic(
        code(supakit::types_not_found),
        help("generate it first, e.g. 'npx supabase gen types typescript --local > database.types.ts'")
    )]
    NotFound { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(supakit::types_unreadable))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
