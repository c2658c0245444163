//! Built-in pipeline phases.
//!
//! - [`ExtractPhase`] - discovers annotated declarations and resolves their types
//! - [`SynthesizePhase`] - resolves type variables and builds one builder per callable
//! - [`ValidatePhase`] - lints the synthesized builders

mod extract;
mod synthesize;
mod validate;

pub use extract::ExtractPhase;
pub use synthesize::SynthesizePhase;
pub use validate::{DuplicateBuilderLint, Lint, LintInfo, TerminalNameLint, ValidatePhase};
