//! `<table>/service.ts` generator.

use std::path::{Path, PathBuf};

use supakit_core::{FileRules, GeneratedFile, to_camel_case};

use crate::{
    ast::Import,
    code_builder::{CodeBuilder, Renderable},
    code_file::CodeFile,
};

/// CRUD service object for one relation, spread from the shared
/// `SupabaseService` factory and left open for custom methods.
pub struct TableService<'a> {
    table: &'a str,
    scope: &'a str,
    client_module: &'a str,
}

impl<'a> TableService<'a> {
    pub fn new(table: &'a str, scope: &'a str, client_module: &'a str) -> Self {
        Self {
            table,
            scope,
            client_module,
        }
    }
}

struct ServiceObject<'a>(&'a str);

impl Renderable for ServiceObject<'_> {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let table = self.0;
        let subject = format!("with the '{}' table.", table);
        builder
            .jsdoc_block(&[
                "A pre-configured service object for interacting",
                subject.as_str(),
                "",
                "This object contains all generic CRUD methods.",
                "You can add custom, table-specific methods to this object.",
            ])
            .block_with_close(
                &format!("export const {}Service = {{", to_camel_case(table)),
                "};",
                |b| {
                    b.line(&format!("...SupabaseService(supabase, '{}'),", table))
                        .blank()
                        .line("// --- Add custom methods below ---")
                        .line("// ...")
                        .line("// --- End custom methods ---")
                },
            )
    }
}

impl GeneratedFile for TableService<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.table).join("service.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(
                Import::new(format!("@{}/supabase-core", self.scope)).named("SupabaseService"),
            )
            .import(Import::new(self.client_module).named("supabase"))
            .add(ServiceObject(self.table))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let file = TableService::new("chat_messages", "acme", "../../../client");

        insta::assert_snapshot!(file.render(), @r"
        import { SupabaseService } from '@acme/supabase-core';
        import { supabase } from '../../../client';

        /**
         * A pre-configured service object for interacting
         * with the 'chat_messages' table.
         *
         * This object contains all generic CRUD methods.
         * You can add custom, table-specific methods to this object.
         */
        export const chatMessagesService = {
          ...SupabaseService(supabase, 'chat_messages'),

          // --- Add custom methods below ---
          // ...
          // --- End custom methods ---
        };
        ");
    }

    #[test]
    fn test_is_create_once() {
        let file = TableService::new("posts", "acme", "../../../client");
        assert_eq!(file.rules().overwrite, supakit_core::Overwrite::IfMissing);
        assert_eq!(
            file.path(Path::new("src/lib/api")),
            PathBuf::from("src/lib/api/posts/service.ts")
        );
    }
}
