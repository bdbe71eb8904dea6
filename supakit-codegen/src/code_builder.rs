//! Code builder utility for generating properly indented TypeScript.

/// One level of TypeScript indentation.
const INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use supakit_codegen::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function main() {")
///     .indent()
///     .line("console.log('hello');")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function main() {\n  console.log('hello');\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line snippet at the current indentation.
    ///
    /// Empty lines stay empty; the snippet's own relative indentation is kept.
    pub fn lines(self, text: &str) -> Self {
        text.lines().fold(self, |b, line| {
            if line.trim().is_empty() {
                b.blank()
            } else {
                b.line(line)
            }
        })
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use supakit_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("if (ok) {", "}", |b| b.line("return;"))
    ///     .build();
    ///
    /// assert_eq!(code, "if (ok) {\n  return;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a multi-line JSDoc comment. Empty entries become bare ` *` lines.
    pub fn jsdoc_block(self, lines: &[&str]) -> Self {
        lines
            .iter()
            .fold(self.line("/**"), |b, text| {
                if text.is_empty() {
                    b.line(" *")
                } else {
                    b.line(&format!(" * {}", text))
                }
            })
            .line(" */")
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

/// A node that can write itself into a [`CodeBuilder`].
pub trait Renderable {
    fn render(&self, builder: CodeBuilder) -> CodeBuilder;

    /// Render on a fresh builder.
    fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_lines_keeps_relative_indent() {
        let code = CodeBuilder::typescript()
            .indent()
            .lines("if (a) {\n  b();\n\n}")
            .build();

        assert_eq!(code, "  if (a) {\n    b();\n\n  }\n");
    }

    #[test]
    fn test_jsdoc_block() {
        let code = CodeBuilder::typescript()
            .jsdoc_block(&["First line", "", "Second line"])
            .build();

        assert_eq!(code, "/**\n * First line\n *\n * Second line\n */\n");
    }

    #[test]
    fn test_conditional() {
        let with_export = CodeBuilder::typescript()
            .when(true, |b| b.raw("export "))
            .line("const a = 1;")
            .build();

        assert_eq!(with_export, "export const a = 1;\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .line("switch (kind) {")
            .indent()
            .each(["a", "b"], |b, kind| b.line(&format!("case '{}':", kind)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "switch (kind) {\n  case 'a':\n  case 'b':\n}\n");
    }
}
