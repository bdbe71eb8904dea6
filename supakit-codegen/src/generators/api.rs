//! Per-table type and service files from an [`Extraction`].

use supakit_core::GeneratedFile;
use supakit_schema::Extraction;

use crate::{
    files::api::{ApiIndex, TableService, TableTypes},
    scaffold::Scaffold,
};

/// Module specifiers the generated files import from.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    /// npm scope of the workspace, for `@<scope>/supabase-core`
    pub workspace_scope: String,
    /// Module exporting `Tables`, `TablesInsert` and `TablesUpdate`
    pub types_module: String,
    /// Module exporting the configured `supabase` client
    pub client_module: String,
}

/// Writes `<table>/<table>.types.ts` and `<table>/service.ts` for every
/// relation, then an `index.ts` barrel.
///
/// Every file is created only if missing, so rerunning after a schema change
/// adds the new tables and keeps hand-edited services.
pub struct ApiGenerator<'a> {
    extraction: &'a Extraction,
    options: ApiOptions,
}

impl<'a> ApiGenerator<'a> {
    pub fn new(extraction: &'a Extraction, options: ApiOptions) -> Self {
        Self {
            extraction,
            options,
        }
    }
}

impl Scaffold for ApiGenerator<'_> {
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();

        for (table, is_view) in self.extraction.schema.iter() {
            files.push(Box::new(TableTypes::new(
                table,
                is_view,
                self.extraction.relationships.get(table),
                &self.options.types_module,
            )));
            files.push(Box::new(TableService::new(
                table,
                &self.options.workspace_scope,
                &self.options.client_module,
            )));
        }

        files.push(Box::new(ApiIndex::new(self.extraction.schema.iter().map(
            |(table, _)| table,
        ))));
        files
    }
}

#[cfg(test)]
mod tests {
    use supakit_schema::{Discard, ExtractOptions, extract};
    use tempfile::TempDir;

    use super::*;

    const SOURCE: &str = r#"export type Database = {
  public: {
    Tables: {
      posts: {
        Row: { id: number; author_id: number }
        Relationships: [
          {
            foreignKeyName: "posts_author_id_fkey"
            columns: ["author_id"]
            isOneToOne: false
            referencedRelation: "authors"
            referencedColumns: ["id"]
          },
        ]
      }
      authors: {
        Row: { id: number }
        Relationships: []
      }
    }
    Views: {
      post_summaries: {
        Row: { id: number | null }
      }
    }
  }
}
"#;

    fn options() -> ApiOptions {
        ApiOptions {
            workspace_scope: "acme".into(),
            types_module: "../../../types".into(),
            client_module: "../../../client".into(),
        }
    }

    fn extraction() -> Extraction {
        extract(SOURCE, &ExtractOptions::default(), &mut Discard)
    }

    #[test]
    fn test_preview_lists_files_in_schema_order() {
        let extraction = extraction();
        let paths: Vec<_> = ApiGenerator::new(&extraction, options())
            .preview()
            .into_iter()
            .map(|f| f.path)
            .collect();

        assert_eq!(
            paths,
            vec![
                "posts/posts.types.ts",
                "posts/service.ts",
                "authors/authors.types.ts",
                "authors/service.ts",
                "post_summaries/post_summaries.types.ts",
                "post_summaries/service.ts",
                "index.ts",
            ]
        );
    }

    #[test]
    fn test_relationship_fields_reach_types_file() {
        let extraction = extraction();
        let preview = ApiGenerator::new(&extraction, options()).preview();

        assert!(
            preview[0]
                .content
                .contains("export type Posts = Tables<'posts'> & {\n  authors?: Tables<'authors'>[];\n};")
        );
        assert!(!preview[4].content.contains("PostSummariesInsert"));
    }

    #[test]
    fn test_generate_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let extraction = extraction();
        let generator = ApiGenerator::new(&extraction, options());

        let first = generator.generate(dir.path()).unwrap();
        assert_eq!(first.written.len(), 7);
        assert!(first.skipped.is_empty());

        let service = dir.path().join("posts/service.ts");
        std::fs::write(&service, "// customised").unwrap();

        let second = generator.generate(dir.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 7);
        assert_eq!(std::fs::read_to_string(service).unwrap(), "// customised");
    }

    #[test]
    fn test_empty_extraction_writes_empty_barrel() {
        let dir = TempDir::new().unwrap();
        let extraction = Extraction::default();

        let result = ApiGenerator::new(&extraction, options())
            .generate(dir.path())
            .unwrap();

        assert_eq!(result.written, vec!["index.ts"]);
        assert_eq!(std::fs::read_to_string(dir.path().join("index.ts")).unwrap(), "");
    }
}
