//! Generates the builders declared in callbuilder.toml into OUT_DIR.

use std::env;

fn main() -> eyre::Result<()> {
    println!("cargo::rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    callbuilder_codegen_rust::compile_manifest("callbuilder.toml", out_dir)?;
    Ok(())
}
