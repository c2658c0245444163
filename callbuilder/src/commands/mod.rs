mod check;
mod completions;
mod explain;
mod generate;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use list::ListCommand;
use tracing_subscriber::EnvFilter;

/// Default manifest file name.
pub(crate) const DEFAULT_MANIFEST: &str = "callbuilder.toml";

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for callbuilder_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "callbuilder")]
#[command(version)]
#[command(about = "Generate typed call builders from a TOML manifest")]
pub(crate) struct Cli {
    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Install the stderr log subscriber.
    ///
    /// `RUST_LOG` is honoured unless `-v` or `-q` is given.
    pub fn init_logging(&self) {
        let directive = self.log_directive();
        let filter = if self.verbose > 0 || self.quiet {
            EnvFilter::new(directive)
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info,callbuilder=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builders from callbuilder.toml
    Generate(GenerateCommand),

    /// Validate callbuilder.toml without writing code
    Check(CheckCommand),

    /// List the annotated declarations in callbuilder.toml
    List(ListCommand),

    /// Show the structure of one generated builder
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
