//! TypeScript type alias builder.

use crate::code_builder::{CodeBuilder, Renderable};

/// A field in an object type literal.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for `export type Name = Base;` aliases.
///
/// Fields, when present, are intersected with the base type:
/// `export type Name = Base & { field?: T; };`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    base: String,
    fields: Vec<Field>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for TypeAlias {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.fields.is_empty() {
            return builder.line(&format!("export type {} = {};", self.name, self.base));
        }

        builder.block_with_close(
            &format!("export type {} = {} & {{", self.name, self.base),
            "};",
            |b| {
                b.each(&self.fields, |b, field| {
                    let opt = if field.optional { "?" } else { "" };
                    b.line(&format!("{}{}: {};", field.name, opt, field.ty))
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_alias() {
        let t = TypeAlias::new("PostsInsert", "TablesInsert<'posts'>").build();
        assert_eq!(t, "export type PostsInsert = TablesInsert<'posts'>;\n");
    }

    #[test]
    fn test_alias_with_intersection() {
        let t = TypeAlias::new("Posts", "Tables<'posts'>")
            .field(Field::new("authors", "Tables<'authors'>[]").optional())
            .field(Field::new("id", "number"))
            .build();

        insta::assert_snapshot!(t, @r"
        export type Posts = Tables<'posts'> & {
          authors?: Tables<'authors'>[];
          id: number;
        };
        ");
    }
}
