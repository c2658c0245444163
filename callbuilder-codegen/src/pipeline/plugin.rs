//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A hook into the compilation pipeline.
///
/// Plugins are called before and after every phase and may inspect or
/// modify the context. See [`TracingPlugin`](super::TracingPlugin).
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
