//! Generate operation - builder emission from a manifest.

use std::path::Path;

use callbuilder_codegen::language::LanguageCodegen;
use callbuilder_codegen_rust::Generator;
use callbuilder_manifest::Manifest;
use eyre::{Context, Result};
use tracing::debug;

use super::{run_pipeline, summarize};
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the generated file is written into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is emitted when any declaration failed; the report then carries
/// the diagnostics only.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = run_pipeline(manifest)?;
    let builders = summarize(&ctx.builders);

    let result = if ctx.has_errors() {
        debug!(errors = ctx.error_count(), "skipping emission");
        None
    } else {
        let generator = Generator::from_context(&ctx);
        let result = if opts.dry_run {
            GenerationResult::Preview(PreviewResult {
                files: generator.preview()?,
            })
        } else {
            let written = generator
                .generate(opts.output_dir)
                .wrap_err("Failed to generate code")?;
            GenerationResult::Written(WrittenResult {
                output_dir: opts.output_dir.to_path_buf(),
                written: written.written,
                unchanged: written.unchanged,
            })
        };
        Some(result)
    };

    Ok(GenerateReport {
        diagnostics: ctx.diagnostics,
        builders,
        result,
    })
}
