//! Command-line interface for wikigen.
//!
//! # Available Commands
//!
//! - `generate` - Render every page template in every language and write the pages
//! - `validate` - Check configuration, templates and languages without rendering
//! - `list` - Print the titles of the pages a `generate` run would produce
//!
//! # Usage
//!
//! ```bash
//! # Render everything into the configured output directory
//! wikigen generate
//!
//! # Only French pages, without writing anything
//! wikigen generate --language fr --dry-run
//!
//! # Check a project in another directory
//! wikigen --config ../wiki/wikigen.toml validate --format json
//! ```
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet`: log level `debug` / `error` (default `info`);
//!   `RUST_LOG` overrides both
//! - `--config <PATH>`: project configuration, defaults to `./wikigen.toml`
//!   (also read from `WIKIGEN_CONFIG`)

pub mod common;
mod generate;
mod list;
pub mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use generate::GenerateCommand;
pub use list::ListCommand;
pub use validate::ValidateCommand;

/// Main CLI structure for wikigen.
#[derive(Parser, Debug)]
#[command(
    name = "wikigen",
    about = "Generate multilingual wiki pages from game data",
    version,
    long_about = "wikigen derives display data from heroes, pets, classes, talents and maps, \
                  expands element and page templates, and writes one wiki page per template \
                  and language."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors and suppress the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to wikigen.toml
    #[arg(long, global = true, env = "WIKIGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and write every page
    Generate(GenerateCommand),

    /// Validate configuration and templates
    Validate(ValidateCommand),

    /// List the pages that would be generated
    List(ListCommand),
}

impl Cli {
    /// Log filter directive derived from the verbosity flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Run the selected command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(self.config, self.quiet, self.verbose).await,
            Commands::Validate(cmd) => cmd.execute(self.config).await,
            Commands::List(cmd) => cmd.execute(self.config).await,
        }
    }
}
