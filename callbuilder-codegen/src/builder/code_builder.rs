//! Indented code output for rendered fragments.

use super::{CodeFragment, Renderable};

/// One indent level, as rustfmt emits it.
const INDENT: &str = "    ";

/// Writes [`CodeFragment`]s as text, indenting block bodies.
///
/// # Example
///
/// ```
/// use callbuilder_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::new();
/// builder.apply_fragment(CodeFragment::braced(
///     "impl AddBuilder {",
///     vec![CodeFragment::line("pub fn build(self) -> i32 {}")],
/// ));
///
/// assert_eq!(builder.build(), "impl AddBuilder {\n    pub fn build(self) -> i32 {}\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.indent_level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.indent_level -= 1;
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::RustDoc(text) => {
                self.push_line(&format!("/// {}", text));
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_carry_no_indent() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::braced(
            "mod a {",
            vec![
                CodeFragment::line("use std::fmt;"),
                CodeFragment::Blank,
                CodeFragment::line("struct A;"),
            ],
        ));

        assert_eq!(builder.build(), "mod a {\n    use std::fmt;\n\n    struct A;\n}\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        struct Node;
        impl Renderable for Node {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::rust_doc("Outer."),
                    CodeFragment::braced(
                        "impl Outer {",
                        vec![
                            CodeFragment::braced("fn a() {", vec![]),
                            CodeFragment::Blank,
                            CodeFragment::braced("fn b() {", vec![CodeFragment::line("todo!()")]),
                        ],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&Node);
        assert_eq!(
            builder.build(),
            "/// Outer.\nimpl Outer {\n    fn a() {\n    }\n\n    fn b() {\n        todo!()\n    }\n}\n"
        );
    }

    #[test]
    fn test_unclosed_block() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::Block {
            header: "where".to_string(),
            body: vec![CodeFragment::line("T: Default,")],
            close: None,
        });
        builder.push_line("{");

        assert_eq!(builder.build(), "where\n    T: Default,\n{\n");
    }
}
