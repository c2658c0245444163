//! Rust emitter for callbuilder.
//!
//! Renders every synthesized builder as a struct with an inherent impl and
//! writes them to a single `builders.rs`. Use [`compile_manifest`] from a
//! `build.rs` script, or [`Generator`] with a pipeline context directly.

mod compile;
mod generator;
mod naming;
mod render;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, GenericParam, Generics, Impl, Param, Struct};
pub use callbuilder_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use compile::compile_manifest;
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use render::RustBuilder;
pub use rust_file::{RustFile, Use};
