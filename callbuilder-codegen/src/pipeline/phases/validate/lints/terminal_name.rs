//! Terminal method name lint.

use callbuilder_core::to_snake_case;
use callbuilder_ir::BuilderSpec;

use crate::pipeline::{Diagnostic, phases::validate::Lint};

/// Rejects terminal names that collide with the builder's own methods.
///
/// Every builder has `new` and one setter per field; setter names are
/// compared in their emitted snake_case form.
pub struct TerminalNameLint;

impl Lint for TerminalNameLint {
    fn name(&self) -> &'static str {
        "terminal-name"
    }

    fn description(&self) -> &'static str {
        "Check that the terminal method does not clash with new or a setter"
    }

    fn check(&self, builders: &[BuilderSpec], diagnostics: &mut Vec<Diagnostic>) {
        for builder in builders {
            let terminal = to_snake_case(&builder.terminal_method_name);
            let clash = if terminal == "new" {
                Some("the constructor")
            } else if builder
                .setters
                .iter()
                .any(|s| to_snake_case(&s.name) == terminal)
            {
                Some("a setter")
            } else {
                None
            };

            if let Some(what) = clash {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "terminal method '{}' of {} clashes with {}",
                            builder.terminal_method_name, builder.generated_name, what
                        ),
                    )
                    .at(builder.source.as_str()),
                );
            }
        }
    }
}
