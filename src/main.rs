//! wikigen command-line entry point.
//!
//! Parses arguments, installs logging on stderr and runs the selected
//! command. Failures are printed with a suggestion and exit with status 1.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikigen_cli::cli::Cli;
use wikigen_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    setup_logging(cli.log_level());

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins over the level chosen by the verbosity flags.
fn setup_logging(default_level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
