//! `wikigen generate`: render every page and write it out.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{ProjectContext, resolve_config_path};
use crate::publish::{DryRunPublisher, FilePublisher, PublishOutcome, PublishReport, publish_all};

/// Render all page templates in every (or the selected) language.
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// Only render pages in this language (repeatable)
    #[arg(short, long = "language", value_name = "CODE")]
    pub languages: Vec<String>,

    /// Render pages without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write pages here instead of the configured output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the command against the project at `config`.
    ///
    /// With `verbose`, the edit summary of every written page follows the
    /// counts.
    pub async fn execute(self, config: Option<PathBuf>, quiet: bool, verbose: bool) -> Result<()> {
        let project = ProjectContext::load(&resolve_config_path(config))?;
        let languages = project.select_languages(&self.languages)?;
        let pages = project.render(&languages)?;

        let (report, summaries) = if self.dry_run {
            let mut publisher = DryRunPublisher::new();
            (publish_all(&mut publisher, &pages).await?, Vec::new())
        } else {
            let output = self.output.unwrap_or_else(|| project.config.output_dir());
            let mut publisher = FilePublisher::new(&output);
            let report = publish_all(&mut publisher, &pages).await?;
            tracing::info!("Pages written to {}", output.display());
            (report, publisher.summaries().to_vec())
        };

        if !quiet {
            print_summary(&report, self.dry_run);
            if verbose {
                for summary in &summaries {
                    println!("  {summary}");
                }
            }
        }
        Ok(())
    }
}

fn print_summary(report: &PublishReport, dry_run: bool) {
    if dry_run {
        println!("{} {} pages rendered (dry run, nothing written)", "✓".green(), report.total());
        return;
    }
    println!(
        "{} {} pages: {} created, {} updated, {} unchanged",
        "✓".green(),
        report.total(),
        report.count(PublishOutcome::Created),
        report.count(PublishOutcome::Updated),
        report.count(PublishOutcome::Unchanged)
    );
}
