//! Duplicate builder name lint.

use callbuilder_ir::{BuilderSpec, SignatureKey};
use indexmap::IndexMap;

use crate::pipeline::{Diagnostic, phases::validate::Lint};

/// Rejects two builders that would be emitted under the same type name.
pub struct DuplicateBuilderLint;

impl Lint for DuplicateBuilderLint {
    fn name(&self) -> &'static str {
        "duplicate-builder"
    }

    fn description(&self) -> &'static str {
        "Check that no two declarations generate the same builder name"
    }

    fn check(&self, builders: &[BuilderSpec], diagnostics: &mut Vec<Diagnostic>) {
        let mut by_name: IndexMap<&str, Vec<&SignatureKey>> = IndexMap::new();
        for builder in builders {
            by_name
                .entry(builder.generated_name.as_str())
                .or_default()
                .push(&builder.source);
        }

        for (name, sources) in by_name {
            if let [first, rest @ ..] = sources.as_slice() {
                for other in rest {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "builder name '{}' is generated by both {} and {}",
                                name, first, other
                            ),
                        )
                        .at(name),
                    );
                }
            }
        }
    }
}
