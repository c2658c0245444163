//! Test utilities for checking that generated builders compile.
//!
//! Only available with the `testing` feature or during tests.

use std::{fs, path::Path, process::Command};

use eyre::{Result, WrapErr};
use tempfile::TempDir;

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Verifies that the code in a directory type-checks.
pub trait CompileChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Runs `cargo check` in the given directory.
pub struct RustChecker;

impl CompileChecker for RustChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("cargo")
            .args(["check", "--quiet", "--offline"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("failed to run cargo check: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CompileError {
                message: "cargo check failed".to_string(),
                output: format!(
                    "stderr:\n{}\n\nstdout:\n{}",
                    String::from_utf8_lossy(&output.stderr),
                    String::from_utf8_lossy(&output.stdout)
                ),
            })
        }
    }
}

/// A throwaway library crate with no dependencies.
///
/// `src/lib.rs` is the model source followed by `mod builders;`, and the
/// generated code goes to `src/builders.rs` with `use super::*;` prepended.
pub struct ScratchCrate {
    dir: TempDir,
}

impl ScratchCrate {
    pub fn new(model: &str, builders: &str) -> Result<Self> {
        let dir = TempDir::new().wrap_err("failed to create scratch crate")?;
        let root = dir.path();

        fs::create_dir_all(root.join("src"))?;
        fs::write(
            root.join("Cargo.toml"),
            "[package]\nname = \"scratch\"\nversion = \"0.0.0\"\nedition = \"2024\"\n\n[workspace]\n",
        )?;
        fs::write(
            root.join("src/lib.rs"),
            format!("#![allow(dead_code)]\n\n{}\nmod builders;\n", model),
        )?;
        fs::write(
            root.join("src/builders.rs"),
            format!("#![allow(unused_imports)]\nuse super::*;\n\n{}", builders),
        )?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn check(&self) -> Result<(), CompileError> {
        RustChecker.check(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_layout() {
        let scratch = ScratchCrate::new("pub struct Adder;", "pub struct AddBuilder;").unwrap();

        let lib = fs::read_to_string(scratch.path().join("src/lib.rs")).unwrap();
        assert!(lib.contains("pub struct Adder;"));
        assert!(lib.ends_with("mod builders;\n"));

        let builders = fs::read_to_string(scratch.path().join("src/builders.rs")).unwrap();
        assert!(builders.contains("use super::*;"));
        assert!(builders.ends_with("pub struct AddBuilder;"));
    }
}
