//! Structured Rust file generation: `use` lines followed by items.

use callbuilder_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    path: String,
}

impl Use {
    /// `path` is everything after `use`, e.g. `crate::model::*`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "use {};",
            self.path.trim_end_matches(';')
        ))]
    }
}

/// A Rust source file organised into imports and body items.
#[derive(Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file below a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for use_stmt in &self.uses {
            builder.emit(use_stmt);
        }

        if !self.uses.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Struct;

    #[test]
    fn test_empty_file() {
        let file = RustFile::new();
        assert_eq!(file.render(), "");
        assert_eq!(file.render_with_header("// header"), "// header\n");
    }

    #[test]
    fn test_use_tolerates_trailing_semicolon() {
        let file = RustFile::new().use_stmts([Use::new("crate::model::*"), Use::new("std::fmt;")]);
        assert_eq!(file.render(), "use crate::model::*;\nuse std::fmt;\n");
    }

    #[test]
    fn test_items_are_separated_by_blank_lines() {
        let file = RustFile::new()
            .use_stmts([Use::new("crate::model::Adder")])
            .add(Struct::new("A"))
            .add(Struct::new("B"));

        assert_eq!(
            file.render_with_header("// header"),
            "// header\n\nuse crate::model::Adder;\n\npub struct A;\n\npub struct B;\n"
        );
    }
}
