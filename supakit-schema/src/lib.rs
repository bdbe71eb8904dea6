//! Schema extraction from generated Supabase type definitions.
//!
//! `supabase gen types typescript` emits a `Database` type whose `Tables` and
//! `Views` blocks describe every relation, including its foreign keys. This
//! crate recovers two maps from that text without parsing TypeScript:
//!
//! - a [`SchemaMap`] of relation name to "is a view",
//! - a [`RelationshipMap`] of table name to its declared foreign-key links.
//!
//! Scanning is line-oriented and tracks brace depth. It tolerates exactly the
//! shape the upstream generator produces; malformed input yields a partial
//! result rather than an error.
//!
//! ```
//! use supakit_schema::{Discard, ExtractOptions, extract};
//!
//! let source = "Tables: {\n  posts: {\n    Row: {}\n  }\n}\n";
//! let extraction = extract(source, &ExtractOptions::default(), &mut Discard);
//!
//! assert_eq!(extraction.schema.is_view("posts"), Some(false));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod diagnostic;
mod error;
mod relationships;
mod scan;
mod source;
mod tables;
mod types;

pub use diagnostic::{Diagnostic, DiagnosticSink, Discard, Severity};
pub use error::{Error, Result};
pub use relationships::extract_relationships;
pub use source::TypesSource;
pub use tables::extract_tables_and_views;
pub use types::{ExtractOptions, Extraction, RelationshipInfo, RelationshipMap, SchemaMap};

/// Run both extraction passes over `source`.
///
/// Reports a summary of what was found as an info diagnostic.
pub fn extract(source: &str, options: &ExtractOptions, sink: &mut dyn DiagnosticSink) -> Extraction {
    let schema = extract_tables_and_views(source, options, sink);
    let relationships = extract_relationships(source, options, sink);

    let views = schema.views().count();
    sink.report(Diagnostic::info(format!(
        "extracted {} tables, {} views and {} relationships",
        schema.len() - views,
        views,
        relationships.total()
    )));

    Extraction {
        schema,
        relationships,
    }
}
