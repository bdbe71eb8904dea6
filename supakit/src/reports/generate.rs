//! Generate command report.

use std::path::PathBuf;

use supakit_schema::Diagnostic;

use super::{
    GenerationResult,
    output::{Output, Report},
    render_diagnostics, render_result,
};

/// Report data from table service generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// The types file that was read.
    pub types_path: PathBuf,
    /// Directory the table modules were written to.
    pub output_dir: PathBuf,
    /// Schema the extraction was scoped to, if any.
    pub schema: Option<String>,
    /// Diagnostics from reading and extraction.
    pub diagnostics: Vec<Diagnostic>,
    pub tables: usize,
    pub views: usize,
    pub relationships: usize,
    /// Files written or previewed.
    pub result: GenerationResult,
    /// Whether to show info diagnostics.
    pub verbose: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics, self.verbose);

        if self.tables + self.views == 0 && self.schema.is_none() {
            out.warning(
                "no tables found; generated types usually need --schema public to skip graphql_public",
            );
        }

        if let GenerationResult::Written(_) = self.result {
            out.key_value("Source", &self.types_path.display().to_string());
            out.key_value(
                "Found",
                &format!(
                    "{} tables, {} views, {} relationships",
                    self.tables, self.views, self.relationships
                ),
            );
            out.newline();
        }

        render_result(out, &self.output_dir.display().to_string(), &self.result);
    }
}

#[cfg(test)]
mod tests {
    use supakit_codegen::{GenerateResult, PreviewFile};

    use super::*;
    use crate::reports::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            types_path: PathBuf::from("src/database.types.ts"),
            output_dir: PathBuf::from("src/lib/api"),
            schema: Some("public".into()),
            diagnostics: vec![
                Diagnostic::warning("could not find Views block"),
                Diagnostic::info("extracted 1 tables, 0 views and 0 relationships"),
            ],
            tables: 1,
            views: 0,
            relationships: 0,
            result,
            verbose: false,
        }
    }

    #[test]
    fn test_written() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(GenerateResult {
            written: vec!["posts/posts.types.ts".into(), "posts/service.ts".into()],
            skipped: vec!["index.ts".into()],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: could not find Views block",
                "Source: src/database.types.ts",
                "Found: 1 tables, 0 views, 0 relationships",
                "",
                "Written (2):",
                "  + src/lib/api/posts/posts.types.ts",
                "  + src/lib/api/posts/service.ts",
                "Kept existing (1):",
                "  = src/lib/api/index.ts",
            ]
        );
    }

    #[test]
    fn test_verbose_shows_info() {
        let mut out = BufferOutput::default();
        let mut report = report(GenerationResult::Preview(vec![PreviewFile {
            path: "index.ts".into(),
            content: "export * from './posts/service';\n".into(),
        }]));
        report.verbose = true;
        report.render(&mut out);

        assert_eq!(out.lines[1], "info: extracted 1 tables, 0 views and 0 relationships");
        assert_eq!(out.lines[2], "── index.ts ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }

    #[test]
    fn test_hint_for_unscoped_empty_result() {
        let mut out = BufferOutput::default();
        let mut report = report(GenerationResult::Written(GenerateResult::default()));
        report.schema = None;
        report.tables = 0;
        report.render(&mut out);

        assert!(out.lines.iter().any(|l| l.contains("--schema public")));
    }
}
