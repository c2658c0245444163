//! Core operations.
//!
//! This module contains the business logic for callbuilder commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;
pub mod list;

use callbuilder_codegen::pipeline::{CompilationContext, Pipeline, TracingPlugin};
use callbuilder_ir::BuilderSpec;
use callbuilder_manifest::Manifest;
use eyre::{Context, Result};

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};
pub use list::list;

use crate::reports::BuilderSummary;

/// Run every phase over the manifest, logging phase boundaries.
fn run_pipeline(manifest: &Manifest) -> Result<CompilationContext> {
    Pipeline::new()
        .plugin(TracingPlugin::new())
        .run(manifest.clone())
        .wrap_err("Pipeline failed")
}

fn summarize(builders: &[BuilderSpec]) -> Vec<BuilderSummary> {
    builders
        .iter()
        .map(|builder| BuilderSummary {
            name: builder.generated_name.clone(),
            type_vars: builder
                .type_var_names()
                .into_iter()
                .map(String::from)
                .collect(),
            source: builder.source.to_string(),
            terminal: builder.terminal_method_name.clone(),
        })
        .collect()
}
