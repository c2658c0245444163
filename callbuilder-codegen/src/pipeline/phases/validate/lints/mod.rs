//! Built-in lints over synthesized builders.

mod duplicate_builder;
mod terminal_name;

pub use duplicate_builder::DuplicateBuilderLint;
pub use terminal_name::TerminalNameLint;
