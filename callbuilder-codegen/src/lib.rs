//! Language-independent builder generation for callbuilder.
//!
//! Given a parsed manifest, this crate discovers the annotated declarations,
//! resolves every type variable to the level that declared it and describes
//! one builder per declaration. Emitters such as `callbuilder-codegen-rust`
//! turn those descriptions into source code.
//!
//! # Module Organization
//!
//! - [`extract`] - declaration discovery and type resolution
//! - [`resolve`] - which type variables a builder declares, and in what order
//! - [`synthesize`] - assembling a [`BuilderSpec`](callbuilder_ir::BuilderSpec)
//! - [`naming`] - builder, setter and terminal names
//! - [`pipeline`] - phases, plugins and diagnostics over a whole manifest
//! - [`builder`] - indentation-aware code building blocks
//! - [`language`] - the emitter trait and naming conventions
//! - [`testing`] - compile-check helpers (feature-gated)

mod error;

pub mod builder;
pub mod extract;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod resolve;
pub mod synthesize;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::GenerateError;
pub use synthesize::generate;
