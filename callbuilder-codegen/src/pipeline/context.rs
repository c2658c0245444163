//! Compilation context passed through pipeline phases.

use callbuilder_ir::{BuilderSpec, CallableSpec};
use callbuilder_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};

/// State carried through each phase of a run.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// Normalized declarations, in manifest order (populated by `ExtractPhase`).
    pub callables: Vec<CallableSpec>,
    /// One builder per callable that generated cleanly (populated by `SynthesizePhase`).
    pub builders: Vec<BuilderSpec>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            callables: Vec::new(),
            builders: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Look up a synthesized builder by its generated name.
    pub fn builder(&self, name: &str) -> Option<&BuilderSpec> {
        self.builders.iter().find(|b| b.generated_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_context() -> CompilationContext {
        CompilationContext::new(Manifest::default())
    }

    #[test]
    fn test_context_creation() {
        let ctx = empty_context();

        assert!(ctx.callables.is_empty());
        assert!(ctx.builders.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.builder("AddBuilder").is_none());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = empty_context();

        ctx.add_error("extract", "bad declaration");
        ctx.add_warning("validate", "odd name");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_context_no_errors() {
        let mut ctx = empty_context();

        ctx.add_warning("validate", "just a warning");
        ctx.add_info("extract", "just info");

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
    }
}
