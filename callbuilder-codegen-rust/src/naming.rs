//! Rust naming conventions for generated builders.

use callbuilder_codegen::language::NamingConvention;
use callbuilder_core::{to_pascal_case, to_snake_case};

fn escape_rust_reserved(name: &str) -> String {
    format!("r#{}", name)
}

/// Rust naming conventions.
///
/// `self`, `Self`, `super` and `crate` cannot be raw identifiers; the
/// manifest rejects them as names before they get here.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_method: to_snake_case,
    to_field: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
        "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe",
        "use", "where", "while", "abstract", "become", "box", "do", "final", "macro", "override",
        "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};
