//! Extract command report.

use supakit_schema::{Diagnostic, Extraction};

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// How the extracted maps are printed.
#[derive(Debug)]
pub enum ExtractFormat {
    /// Indented listing of relations and their links.
    Tree,
    /// Pretty-printed JSON of both maps.
    Json(String),
}

/// Report data from a schema extraction.
#[derive(Debug)]
pub struct ExtractReport {
    pub extraction: Extraction,
    pub diagnostics: Vec<Diagnostic>,
    pub format: ExtractFormat,
    pub verbose: bool,
}

impl Report for ExtractReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics, self.verbose);

        match &self.format {
            ExtractFormat::Json(json) => out.preformatted(json),
            ExtractFormat::Tree => self.render_tree(out),
        }
    }
}

impl ExtractReport {
    fn render_tree(&self, out: &mut dyn Output) {
        let schema = &self.extraction.schema;
        let tables: Vec<_> = schema.tables().collect();
        let views: Vec<_> = schema.views().collect();

        out.section(&format!("Tables ({})", tables.len()));
        for table in tables {
            out.list_item(table);
            for rel in self.extraction.relationships.get(table) {
                let cardinality = if rel.is_array { "many" } else { "one" };
                out.preformatted(&format!(
                    "      -> {} ({}, {})",
                    rel.target_table, cardinality, rel.foreign_key
                ));
            }
        }

        if !views.is_empty() {
            out.newline();
            out.section(&format!("Views ({})", views.len()));
            for view in views {
                out.list_item(view);
            }
        }
    }
}
