//! TypeScript AST builders.

mod exports;
mod imports;
mod types;

pub use exports::Export;
pub use imports::Import;
pub use types::{Field, TypeAlias};
