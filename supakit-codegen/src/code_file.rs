//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with
//! organized imports, body content, and exports sections.

use crate::{
    ast::{Export, Import},
    code_builder::{CodeBuilder, Renderable},
};

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: imports, body, and exports.
/// Each section is rendered in order with blank lines between them, and
/// body elements are separated from each other by a blank line.
///
/// # Example
///
/// ```
/// use supakit_codegen::{CodeFile, Import, RawCode};
///
/// let file = CodeFile::new()
///     .import(Import::new("./client").named("supabase"))
///     .add(RawCode::new("export default supabase;"))
///     .render();
///
/// assert_eq!(
///     file,
///     "import { supabase } from './client';\n\nexport default supabase;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<String>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.build());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|n| n.build()));
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Add exports from an iterator.
    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder = import.render(builder);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder = builder.blank();
        }

        for (i, chunk) in self.body.iter().enumerate() {
            if i > 0 {
                builder = builder.blank();
            }
            builder = builder.raw(chunk);
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder = builder.blank();
        }

        for export in &self.exports {
            builder = export.render(builder);
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding raw code strings to CodeFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.lines(&self.0)
    }
}
