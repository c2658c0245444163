//! Validate phase - runs lints over the synthesized builders.

mod lint;
pub mod lints;

use eyre::Result;
use tracing::debug;
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateBuilderLint, TerminalNameLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks builders against a configurable set of lints.
///
/// Lint errors are recorded as diagnostics; the phase itself never fails.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// A validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![Box::new(DuplicateBuilderLint), Box::new(TerminalNameLint)],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check synthesized builders for name clashes"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.builders, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
        Ok(())
    }
}
