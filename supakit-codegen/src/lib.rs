//! TypeScript scaffolding for Supabase projects.
//!
//! Three generators share one [`Scaffold`] trait:
//!
//! - [`ApiGenerator`] turns an [`Extraction`](supakit_schema::Extraction) into
//!   per-table type aliases and CRUD services,
//! - [`StripeGenerator`] writes Stripe edge functions and a client service,
//! - [`WorkspaceGenerator`] lays out a new Yarn monorepo.
//!
//! Files are assembled with [`CodeBuilder`] and the small AST in [`ast`].

pub mod ast;
mod code_builder;
mod code_file;
pub mod files;
mod generators;
mod scaffold;

pub use ast::{Export, Field, Import, TypeAlias};
pub use code_builder::{CodeBuilder, Renderable};
pub use code_file::{CodeFile, RawCode};
pub use files::stripe::{EdgeFunction, handled_event_types};
pub use generators::{ApiGenerator, ApiOptions, REQUIRED_ENV, StripeGenerator, WorkspaceGenerator};
pub use scaffold::{GenerateResult, PreviewFile, Scaffold};
