//! One-call generation for `build.rs` scripts.

use std::path::Path;

use callbuilder_codegen::{
    language::{GenerateResult, LanguageCodegen},
    pipeline::{Pipeline, TracingPlugin},
};
use callbuilder_manifest::ManifestFile;
use eyre::{Result, WrapErr, bail, eyre};

use crate::Generator;

/// Parse `manifest_path`, generate every builder and write the output file
/// into `out_dir`.
///
/// Prints `cargo:rerun-if-changed` for the manifest and reports warnings as
/// `cargo:warning` lines. Any error diagnostic fails the build.
///
/// ```no_run
/// // build.rs
/// fn main() {
///     let out_dir = std::env::var("OUT_DIR").unwrap();
///     callbuilder_codegen_rust::compile_manifest("callbuilder.toml", out_dir).unwrap();
/// }
/// ```
pub fn compile_manifest(
    manifest_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<GenerateResult> {
    let manifest_path = manifest_path.as_ref();
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let file = ManifestFile::open(manifest_path)
        .map_err(|err| eyre!("{:?}", miette::Report::new(*err)))?;

    let ctx = Pipeline::new()
        .plugin(TracingPlugin::new())
        .run(file.manifest().clone())
        .wrap_err_with(|| format!("failed to compile '{}'", manifest_path.display()))?;

    for warning in ctx.warnings() {
        println!("cargo:warning={}", warning);
    }
    if ctx.has_errors() {
        let errors = ctx
            .errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "{} declaration(s) in '{}' could not be generated:\n{}",
            ctx.error_count(),
            manifest_path.display(),
            errors
        );
    }

    Generator::from_context(&ctx).generate(out_dir.as_ref())
}
