//! Generate command report data structures.

use std::path::PathBuf;

use callbuilder_codegen::{language::PreviewFile, pipeline::Diagnostic};

use super::{
    check::BuilderSummary,
    diagnostics::{has_errors, plural, render_diagnostics},
    output::{Output, Report},
};

/// Report data from builder generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub diagnostics: Vec<Diagnostic>,
    pub builders: Vec<BuilderSummary>,
    /// Absent when errors prevented emission.
    pub result: Option<GenerationResult>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that were already up to date.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        match &self.result {
            Some(GenerationResult::Written(written)) => self.render_written(out, written),
            Some(GenerationResult::Preview(preview)) => self.render_preview(out, preview),
            None => {}
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Builders ({})", self.builders.len()));
        for builder in &self.builders {
            out.list_item(&builder.line());
        }
        out.newline();

        if !written.written.is_empty() {
            out.section("Generated");
            for file in &written.written {
                out.added_item(&written.output_dir.join(file).display().to_string());
            }
        }
        for file in &written.unchanged {
            out.key_value(
                "Up to date",
                &written.output_dir.join(file).display().to_string(),
            );
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be generated into {}",
            plural(self.builders.len(), "builder"),
            plural(preview.files.len(), "file")
        ));
    }
}
