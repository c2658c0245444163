use std::path::PathBuf;

use callbuilder_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::{DEFAULT_MANIFEST, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to callbuilder.toml
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,

    /// Output directory (defaults to the manifest's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| file.dir().to_path_buf());

        let report = ops::generate(
            file.manifest(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
