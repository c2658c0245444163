//! Compilation pipeline for builder generation.
//!
//! A [`Pipeline`] takes a parsed manifest through explicit phases
//! (extract → synthesize → validate), calling [`Plugin`] hooks around each
//! phase and collecting [`Diagnostic`]s in a shared [`CompilationContext`].
//! A declaration that fails is reported and dropped; the rest of the batch
//! still produces builders.

mod context;
mod diagnostic;
mod logging;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use logging::TracingPlugin;
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
