use std::path::PathBuf;

use callbuilder_manifest::ManifestFile;
use clap::Args;
use eyre::Result;

use super::{DEFAULT_MANIFEST, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to callbuilder.toml
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(file.manifest(), file.path())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
