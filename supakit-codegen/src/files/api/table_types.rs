//! `<table>/<table>.types.ts` generator.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use supakit_core::{FileRules, GeneratedFile, to_pascal_case};
use supakit_schema::RelationshipInfo;

use crate::{
    ast::{Field, Import, TypeAlias},
    code_file::{CodeFile, RawCode},
};

/// Row, insert and update aliases for one relation.
///
/// The row alias gets an optional property per related table so joined
/// selects can be typed without casts. Views get only the row alias; it
/// carries relationship fields when a table of the same name declared some.
pub struct TableTypes<'a> {
    table: &'a str,
    is_view: bool,
    relationships: &'a [RelationshipInfo],
    types_module: &'a str,
}

impl<'a> TableTypes<'a> {
    pub fn new(
        table: &'a str,
        is_view: bool,
        relationships: &'a [RelationshipInfo],
        types_module: &'a str,
    ) -> Self {
        Self {
            table,
            is_view,
            relationships,
            types_module,
        }
    }

    /// One optional field per target table; later links to the same target
    /// would produce a duplicate property and are left out.
    fn relationship_fields(&self) -> Vec<Field> {
        let mut seen = HashSet::new();
        self.relationships
            .iter()
            .filter(|rel| seen.insert(rel.target_table.as_str()))
            .map(|rel| {
                let row = format!("Tables<'{}'>", rel.target_table);
                let ty = if rel.is_array {
                    format!("{}[]", row)
                } else {
                    format!("{} | null", row)
                };
                Field::new(rel.target_table.clone(), ty).optional()
            })
            .collect()
    }
}

impl GeneratedFile for TableTypes<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.table).join(format!("{}.types.ts", self.table))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        let name = to_pascal_case(self.table);
        let row = TypeAlias::new(&name, format!("Tables<'{}'>", self.table))
            .fields(self.relationship_fields());

        if self.is_view {
            return CodeFile::new()
                .import(Import::new(self.types_module).named("Tables").type_only())
                .add(row)
                .render();
        }

        CodeFile::new()
            .import(
                Import::new(self.types_module)
                    .named("Tables")
                    .named("TablesInsert")
                    .named("TablesUpdate")
                    .type_only(),
            )
            .add(row)
            .add(RawCode::lines([
                format!("export type {}Insert = TablesInsert<'{}'>;", name, self.table),
                format!("export type {}Update = TablesUpdate<'{}'>;", name, self.table),
            ]))
            .render()
    }
}
