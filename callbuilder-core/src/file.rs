use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Generated by callbuilder. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        match rules.overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
            Overwrite::IfChanged => {
                let content = self.render();
                match std::fs::read_to_string(&path) {
                    Ok(existing) if existing == content => Ok(WriteResult::Unchanged),
                    _ => {
                        write_file(&path, &content)?;
                        Ok(WriteResult::Written)
                    }
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
    /// File already had identical content
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for fully generated files.
    pub fn always_overwrite() -> Self {
        Self::default()
    }

    /// Rules for files that are only rewritten when their content changes.
    ///
    /// Keeps mtimes stable so `build.rs` consumers do not trigger rebuilds.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
            header: None,
        }
    }

    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
    /// Overwrite only when the rendered content differs
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
