//! Synthesize phase - builds one `BuilderSpec` per extracted callable.

use eyre::Result;
use tracing::{debug, warn};

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    synthesize::generate,
};

/// Phase that resolves type variables and synthesizes builders.
pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Resolve type variables and synthesize builder descriptions"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut builders = Vec::with_capacity(ctx.callables.len());

        for spec in &ctx.callables {
            match generate(spec) {
                Ok(builder) => {
                    debug!(
                        builder = %builder.generated_name,
                        signature = %builder.source,
                        type_vars = builder.type_vars.len(),
                        "synthesized builder"
                    );
                    builders.push(builder);
                }
                Err(err) => {
                    warn!(signature = %err.signature(), kind = err.kind(), "no builder generated");
                    ctx.diagnostics
                        .push(Diagnostic::from_generate_error(self.name(), &err));
                }
            }
        }

        ctx.builders = builders;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use callbuilder_manifest::parse_manifest;

    use super::*;
    use crate::pipeline::phases::ExtractPhase;

    fn run(src: &str) -> CompilationContext {
        let manifest = parse_manifest(src, "test.toml").unwrap();
        let mut ctx = CompilationContext::new(manifest);
        ExtractPhase.run(&mut ctx).unwrap();
        SynthesizePhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_unresolved_bound_skips_only_that_builder() {
        let ctx = run(r#"
[[impl]]
self = "HasGen<E>"
generics = ["E"]

[[impl.fn]]
name = "wrap"
args = ["item: E"]
call_builder = {}

[[impl.fn]]
name = "pick_some"
receiver = "&self"
args = ["a: E", "b: E"]
returns = "Vec<E>"
call_builder = {}
"#);

        assert_eq!(ctx.callables.len(), 2);
        assert_eq!(ctx.builders.len(), 1);
        assert_eq!(ctx.builders[0].generated_name, "PickSomeBuilder");

        let diag = ctx.errors().next().unwrap();
        assert_eq!(diag.phase, "synthesize");
        assert_eq!(diag.location.as_deref(), Some("HasGen<E>::wrap(E)"));
        assert!(diag.message.contains("parameter 'item'"));
    }
}
