use std::path::PathBuf;

use callbuilder_manifest::ManifestFile;
use clap::Args;
use eyre::{Context, Result};

use super::{DEFAULT_MANIFEST, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Name of the generated builder (e.g. AddBuilder)
    pub name: String,

    /// Path to callbuilder.toml
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub config: PathBuf,

    /// Print the builder structure as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::explain(file.manifest(), &self.name)?;
        if self.json {
            let json = serde_json::to_string_pretty(&report.builder)
                .wrap_err("Failed to serialize builder")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
