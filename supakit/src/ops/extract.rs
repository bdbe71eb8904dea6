//! Extract operation - print the schema graph of a types file.

use eyre::{Result, WrapErr};
use supakit_schema::{Diagnostic, ExtractOptions, TypesSource};

use crate::reports::{ExtractFormat, ExtractReport};

/// Execute the extract operation.
pub fn extract(
    source: &TypesSource,
    mut diagnostics: Vec<Diagnostic>,
    options: &ExtractOptions,
    json: bool,
    verbose: bool,
) -> Result<ExtractReport> {
    let extraction = source.extract(options, &mut diagnostics);

    let format = if json {
        ExtractFormat::Json(
            serde_json::to_string_pretty(&extraction).wrap_err("failed to serialize schema")?,
        )
    } else {
        ExtractFormat::Tree
    };

    Ok(ExtractReport {
        extraction,
        diagnostics,
        format,
        verbose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let source = TypesSource::from_text(
            "types.ts",
            "Tables: {\n  posts: {\n    Row: {}\n  }\n}\nViews: {\n  stats: {\n  }\n}\n",
        );

        let report = extract(&source, Vec::new(), &ExtractOptions::default(), true, false).unwrap();

        let ExtractFormat::Json(json) = report.format else {
            panic!("expected JSON output");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "schema": { "posts": false, "stats": true },
                "relationships": { "posts": [] }
            })
        );
    }
}
