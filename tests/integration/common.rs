//! Shared helpers for the integration suite.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wikigen_cli::test_utils::ProjectFixture;

/// A fixture project written into a temporary directory.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    config_path: PathBuf,
}

impl TestProject {
    /// Project built from the default fixture.
    pub fn new() -> Result<Self> {
        Self::with_fixture(ProjectFixture::default())
    }

    /// Project built from a customised fixture.
    pub fn with_fixture(fixture: ProjectFixture) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;
        let config_path = fixture.write_to(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            config_path,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of a generated page under the default output directory.
    pub fn page_path(&self, language: &str, file: &str) -> PathBuf {
        self.project_dir.join("output").join(language).join(file)
    }

    /// Read a generated page.
    pub fn read_page(&self, language: &str, file: &str) -> Result<String> {
        let path = self.page_path(language, file);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// `wikigen` command running inside the project directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wikigen").expect("wikigen binary is built");
        cmd.current_dir(&self.project_dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
        cmd
    }

    /// Run `wikigen` with `args` and capture its output.
    pub fn run_wikigen(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command().args(args).output().context("Failed to run wikigen")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStdout: {}\nStderr: {}",
            self.code, self.stdout, self.stderr
        );
        self
    }

    /// Assert the command failed with exit status 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit code 1\nStdout: {}", self.stdout);
        self
    }
}
