//! Check operation - manifest validation.

use std::path::Path;

use callbuilder_manifest::Manifest;
use eyre::Result;

use super::{run_pipeline, summarize};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline without emitting and returns its diagnostics together
/// with the builders that would be generated.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = run_pipeline(manifest)?;
    let builders = summarize(&ctx.builders);

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        declarations: ctx.callables.len(),
        diagnostics: ctx.diagnostics,
        builders,
    })
}
