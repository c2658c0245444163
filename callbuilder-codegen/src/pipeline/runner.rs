//! Pipeline orchestrator.

use callbuilder_manifest::Manifest;
use eyre::Result;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ExtractPhase, SynthesizePhase, ValidatePhase},
};

/// Runs the built-in phases (extract, synthesize, validate) followed by any
/// user phases, calling plugin hooks around each one.
///
/// # Example
///
/// ```
/// use callbuilder_codegen::pipeline::{Pipeline, TracingPlugin};
/// use callbuilder_manifest::parse_manifest;
///
/// let manifest = parse_manifest(
///     r#"
/// [[impl]]
/// self = "Adder"
///
/// [[impl.fn]]
/// name = "add"
/// receiver = "&self"
/// args = ["x: i32", "y: i32"]
/// returns = "i32"
/// call_builder = {}
/// "#,
///     "callbuilder.toml",
/// )
/// .unwrap();
///
/// let ctx = Pipeline::new().plugin(TracingPlugin::new()).run(manifest).unwrap();
/// assert!(!ctx.has_errors());
/// assert_eq!(ctx.builders[0].generated_name, "AddBuilder");
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to run extra lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase on a manifest.
    ///
    /// Declarations that cannot be generated leave error diagnostics in the
    /// returned context; check [`CompilationContext::has_errors`].
    ///
    /// # Errors
    ///
    /// Returns an error if a phase or plugin fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        let builtin: [&dyn Phase; 3] = [&ExtractPhase, &SynthesizePhase, &self.validate];
        for phase in builtin {
            self.run_phase(phase, &mut ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use callbuilder_manifest::parse_manifest;

    use super::*;

    struct RecordingPlugin {
        before: Arc<Mutex<Vec<String>>>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before.lock().unwrap().push(phase.to_string());
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct CountBuilders(Arc<AtomicUsize>);

    impl Phase for CountBuilders {
        fn name(&self) -> &'static str {
            "count"
        }

        fn description(&self) -> &'static str {
            "Count builders"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            self.0.store(ctx.builders.len(), Ordering::SeqCst);
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        parse_manifest(
            r#"
[[impl]]
self = "ConfusingSignatures"

[[impl.fn]]
name = "add"
receiver = "&self"
args = ["x: i32", "y: i32", "z: i32"]
returns = "i32"
call_builder = {}

[[impl.fn]]
name = "total"
receiver = "&self"
returns = "i32"
call_builder = {}
"#,
            "test.toml",
        )
        .unwrap()
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new().run(make_test_manifest()).unwrap();

        assert_eq!(ctx.callables.len(), 1);
        assert_eq!(ctx.builders.len(), 1);
        assert!(ctx.builder("AddBuilder").is_some());
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(Mutex::new(Vec::new()));
        let after_count = Arc::new(AtomicUsize::new(0));
        let plugin = RecordingPlugin {
            before: before.clone(),
            after_count: after_count.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(make_test_manifest())
            .unwrap();

        assert_eq!(
            *before.lock().unwrap(),
            vec!["extract", "synthesize", "validate"]
        );
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_user_phase_runs_last() {
        let seen = Arc::new(AtomicUsize::new(0));
        Pipeline::new()
            .phase(CountBuilders(seen.clone()))
            .plugin(crate::pipeline::TracingPlugin::new())
            .run(make_test_manifest())
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
