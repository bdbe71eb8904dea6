//! `index.ts` barrel generator.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile};

use crate::{ast::Export, code_file::CodeFile};

/// Re-exports every table service from the API directory.
pub struct ApiIndex<'a> {
    tables: Vec<&'a str>,
}

impl<'a> ApiIndex<'a> {
    pub fn new(tables: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            tables: tables.into_iter().collect(),
        }
    }
}

impl GeneratedFile for ApiIndex<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .exports(
                self.tables
                    .iter()
                    .map(|table| Export::new().from(format!("./{}/service", table))),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_tables_in_order() {
        let index = ApiIndex::new(["posts", "authors", "post_summaries"]);

        insta::assert_snapshot!(index.render(), @r"
        export * from './posts/service';
        export * from './authors/service';
        export * from './post_summaries/service';
        ");
    }

    #[test]
    fn test_empty_schema_renders_empty_file() {
        assert_eq!(ApiIndex::new([]).render(), "");
    }
}
