//! Check command report data structures.

use std::path::PathBuf;

use callbuilder_codegen::pipeline::Diagnostic;

use super::{
    diagnostics::{has_errors, plural, render_diagnostics},
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Number of annotated declarations that were extracted.
    pub declarations: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub builders: Vec<BuilderSummary>,
}

/// One line of the builder overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSummary {
    pub name: String,
    pub type_vars: Vec<String>,
    /// Signature key of the source declaration.
    pub source: String,
    pub terminal: String,
}

impl BuilderSummary {
    /// `ToIterableBuilder<F, E>::build -> HasGen<E>::to_iterable(F, Vec<E>)`
    pub fn line(&self) -> String {
        let generics = if self.type_vars.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_vars.join(", "))
        };
        format!(
            "{}{}::{} -> {}",
            self.name, generics, self.terminal, self.source
        )
    }
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !has_errors(&self.diagnostics)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        if !self.is_valid() {
            return;
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.section(&format!(
            "{} from {}",
            plural(self.builders.len(), "builder"),
            plural(self.declarations, "declaration")
        ));
        for builder in &self.builders {
            out.list_item(&builder.line());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn summary() -> BuilderSummary {
        BuilderSummary {
            name: "PickSomeBuilder".into(),
            type_vars: vec!["E".into()],
            source: "HasGen<E>::pick_some(E, E)".into(),
            terminal: "build".into(),
        }
    }

    #[test]
    fn test_valid_report_lists_builders() {
        let report = CheckReport {
            config_path: "callbuilder.toml".into(),
            declarations: 1,
            diagnostics: vec![],
            builders: vec![summary()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            "✓ callbuilder.toml is valid\n\n1 builder from 1 declaration:\n  - PickSomeBuilder<E>::build -> HasGen<E>::pick_some(E, E)\n"
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_errors_go_to_stderr() {
        let report = CheckReport {
            config_path: "callbuilder.toml".into(),
            declarations: 2,
            diagnostics: vec![
                Diagnostic::error("synthesize", "unresolved").at("HasGen<E>::wrap(E)"),
            ],
            builders: vec![summary()],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(!report.is_valid());
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, "error: unresolved\n  --> HasGen<E>::wrap(E)\n");
    }
}
