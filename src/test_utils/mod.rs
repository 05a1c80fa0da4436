//! Test utilities for wikigen
//!
//! This module provides the logging setup used by tests and a set of fixtures
//! describing a small, complete project (templates, languages, dataset).
//!
//! # Example
//!
//! ```rust,no_run
//! use wikigen_cli::test_utils::{ProjectFixture, init_test_logging};
//!
//! # fn example() -> anyhow::Result<()> {
//! init_test_logging(None);
//! let temp = tempfile::tempdir()?;
//! let config_path = ProjectFixture::default().write_to(temp.path())?;
//! assert!(config_path.exists());
//! # Ok(())
//! # }
//! ```

pub mod fixtures;

pub use fixtures::ProjectFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG` when set; with neither,
/// no subscriber is installed.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
