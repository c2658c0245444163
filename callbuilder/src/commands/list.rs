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
pub struct ListCommand {
    /// Path to callbuilder.toml
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        ops::list(file.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
