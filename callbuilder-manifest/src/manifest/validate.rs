//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result};

/// Parsing and validation context that carries source information.
///
/// Nested contexts share the source and add a path segment, so errors
/// can say where in the manifest a name was found.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "callbuilder.toml");
/// let fn_ctx = ctx.push("HasGen").push("to_iterable");
/// fn_ctx.validate_name("first", "argument")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: Arc<Source>,
    path: Vec<String>,
}

#[derive(Debug)]
struct Source {
    src: String,
    filename: String,
}

impl ParseContext {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(Source {
                src: src.to_string(),
                filename: filename.to_string(),
            }),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        &self.source.src
    }

    pub fn filename(&self) -> &str {
        &self.source.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// The current path, joined with `::`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Describe `kind` at the current location, e.g. "argument in 'HasGen::pick'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src(), name)
    }

    /// Validate that a name is a usable Rust identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                self.context_for(kind),
                self.src(),
                self.filename(),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src(),
                self.filename(),
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// A validation error located at `name`, if it can be found.
    pub fn error_at(&self, message: impl Into<String>, name: &str) -> Box<Error> {
        Error::validation(message, self.src(), self.filename(), self.find_span(name))
    }

    pub fn duplicate_argument(&self, name: &str, function: &str) -> Box<Error> {
        let mut spans = arg_spans(self.src(), name);
        Box::new(Error::DuplicateArgument {
            src: miette::NamedSource::new(self.filename(), self.src().to_string()),
            first_span: spans.next(),
            second_span: spans.next(),
            name: name.to_string(),
            function: function.to_string(),
        })
    }

    pub fn shadowed_generic(&self, name: &str, function: &str, owner: &str) -> Box<Error> {
        Box::new(Error::ShadowedGeneric {
            src: miette::NamedSource::new(self.filename(), self.src().to_string()),
            span: generic_spans(self.src(), name).nth(1),
            name: name.to_string(),
            function: function.to_string(),
            owner: owner.to_string(),
        })
    }
}

/// Rust reserved keywords that cannot be used as identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub(crate) const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
/// Searches for `name = "value"`, `"value: Type"` and `"value"` string forms.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("name = \"{}\"", name), 8usize),
        (format!("name = '{}'", name), 8usize),
        (format!("name=\"{}\"", name), 6usize),
        (format!("\"{}:", name), 1usize),
        (format!("\"{}\"", name), 1usize),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Every `"name: Type"` occurrence, in source order.
fn arg_spans<'a>(src: &'a str, name: &'a str) -> impl Iterator<Item = SourceSpan> + 'a {
    let pattern = format!("\"{}:", name);
    src.match_indices(&pattern)
        .map(|(pos, _)| SourceSpan::from((pos + 1, name.len())))
        .collect::<Vec<_>>()
        .into_iter()
}

/// Every `"Name"` or `"Name: Bound"` generic declaration, in source order.
fn generic_spans(src: &str, name: &str) -> impl Iterator<Item = SourceSpan> {
    let bare = format!("\"{}\"", name);
    let bounded = format!("\"{}:", name);
    let mut positions: Vec<usize> = src
        .match_indices(&bare)
        .chain(src.match_indices(&bounded))
        .map(|(pos, _)| pos + 1)
        .collect();
    positions.sort_unstable();
    let len = name.len();
    positions
        .into_iter()
        .map(move |pos| SourceSpan::from((pos, len)))
}

/// Validate that a name is a plain Rust identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if name == "_" {
        return Some("'_' is not a usable name");
    }

    if is_rust_keyword(name) {
        return Some("name is a Rust reserved keyword");
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
