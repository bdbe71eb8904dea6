//! Generate operation - table services from a types file.

use std::path::Path;

use eyre::{Result, WrapErr};
use supakit_codegen::{ApiGenerator, ApiOptions, Scaffold};
use supakit_schema::{Diagnostic, ExtractOptions, TypesSource};

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the table modules are written to.
    pub output_dir: &'a Path,
    /// Schema to scope extraction to.
    pub schema: Option<String>,
    pub api: ApiOptions,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    pub verbose: bool,
}

/// Execute the generate operation.
///
/// `diagnostics` carries anything already reported while loading `source`.
pub fn generate(
    source: &TypesSource,
    mut diagnostics: Vec<Diagnostic>,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let extract_options = ExtractOptions {
        schema: opts.schema.clone(),
    };
    let extraction = source.extract(&extract_options, &mut diagnostics);

    let generator = ApiGenerator::new(&extraction, opts.api);
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else {
        GenerationResult::Written(
            generator
                .generate(opts.output_dir)
                .wrap_err("failed to write table services")?,
        )
    };

    let views = extraction.schema.views().count();
    Ok(GenerateReport {
        types_path: source.path().to_path_buf(),
        output_dir: opts.output_dir.to_path_buf(),
        schema: opts.schema,
        diagnostics,
        tables: extraction.schema.len() - views,
        views,
        relationships: extraction.relationships.total(),
        result,
        verbose: opts.verbose,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const SOURCE: &str = r#"Tables: {
  posts: {
    Row: {}
  }
}
Views: {
}
"#;

    fn options(output_dir: &Path, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            schema: None,
            api: ApiOptions {
                workspace_scope: "acme".into(),
                types_module: "../../../types".into(),
                client_module: "../../../client".into(),
            },
            dry_run,
            verbose: false,
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("api");
        let source = TypesSource::from_text("database.types.ts", SOURCE);

        let report = generate(&source, Vec::new(), options(&output, true)).unwrap();

        assert!(!output.exists());
        match report.result {
            GenerationResult::Preview(files) => assert_eq!(files.len(), 3),
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_writes_and_counts() {
        let dir = TempDir::new().unwrap();
        let source = TypesSource::from_text("database.types.ts", SOURCE);

        let report = generate(&source, Vec::new(), options(dir.path(), false)).unwrap();

        assert_eq!((report.tables, report.views, report.relationships), (1, 0, 0));
        assert!(dir.path().join("posts/service.ts").exists());
        assert!(
            report
                .diagnostics
                .iter()
                .any(|d| d.message == "extracted 1 tables, 0 views and 0 relationships")
        );
    }
}
