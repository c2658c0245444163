use callbuilder_codegen::pipeline::{Diagnostic, Severity};

use super::output::Output;

/// Render pipeline diagnostics, pointing each one at its declaration.
pub(super) fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => out.error(&msg),
            Severity::Warning => out.warning(&msg),
            Severity::Info => out.preformatted(&format!("info: {}", msg)),
        }
    }
}

pub(super) fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity.is_error())
}

/// `1 builder`, `2 builders`
pub(super) fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
