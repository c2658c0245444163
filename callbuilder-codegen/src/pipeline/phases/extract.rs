//! Extract phase - discovers annotated declarations and normalizes them.

use std::collections::HashSet;

use eyre::Result;
use tracing::{debug, warn};

use crate::{
    extract::{discover, extract},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that turns annotated manifest functions into callables.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Discover annotated declarations and resolve their types"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut seen = HashSet::new();
        let mut callables = Vec::new();
        let mut diagnostics = Vec::new();

        for raw in discover(&ctx.manifest) {
            match extract(&raw) {
                Ok(spec) => {
                    let key = spec.signature_key();
                    if !seen.insert(key.clone()) {
                        warn!(signature = %key, "skipping repeated declaration");
                        diagnostics.push(
                            Diagnostic::error(
                                self.name(),
                                format!("{} is declared more than once", key),
                            )
                            .at(key.as_str()),
                        );
                        continue;
                    }
                    debug!(signature = %key, kind = spec.kind.as_str(), "extracted declaration");
                    callables.push(spec);
                }
                Err(err) => {
                    warn!(signature = %err.signature(), kind = err.kind(), "rejected declaration");
                    diagnostics.push(Diagnostic::from_generate_error(self.name(), &err));
                }
            }
        }

        ctx.callables = callables;
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}
