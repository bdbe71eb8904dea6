//! TypeScript export builder.

use crate::code_builder::{CodeBuilder, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

impl Renderable for Export {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let type_kw = if self.type_only { "type " } else { "" };

        let export_str = match (&self.from, self.named.is_empty()) {
            (Some(from), true) => format!("export {}* from '{}';", type_kw, from),
            (Some(from), false) => format!(
                "export {}{{ {} }} from '{}';",
                type_kw,
                self.named.join(", "),
                from
            ),
            (None, false) => format!("export {}{{ {} }};", type_kw, self.named.join(", ")),
            (None, true) => return builder,
        };

        builder.line(&export_str)
    }
}
