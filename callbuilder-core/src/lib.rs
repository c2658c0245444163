//! Core utilities and types for the callbuilder generator.
//!
//! This crate provides fundamental types and utilities used across
//! the callbuilder crates: the Rust type syntax accepted in manifests,
//! case conversion helpers and generated-file writing.

mod file;
mod syntax;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// Type syntax
pub use syntax::{
    GenericArgExpr, PathExpr, SegmentExpr, SyntaxError, TypeExpr, TypeParam, split_param,
};
// String utilities
pub use utils::{capitalize, to_pascal_case, to_snake_case};
