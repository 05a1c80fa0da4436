//! Publishing generated pages.
//!
//! A [`PagePublisher`] receives pages one by one and reports whether each was
//! created, updated or left unchanged. [`FilePublisher`] writes one
//! `.wiki` file per page under `<output>/<language>/` and refuses two titles
//! that land on the same file; [`DryRunPublisher`] only logs what would be
//! written.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use crate::constants::PAGE_FILE_EXTENSION;
use crate::pages::GeneratedPage;

/// Result of publishing one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublishOutcome {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        })
    }
}

/// Destination of generated pages.
pub trait PagePublisher {
    /// Publish one page.
    fn publish(&mut self, page: &GeneratedPage) -> impl Future<Output = Result<PublishOutcome>> + Send;
}

/// Edit summary recorded with every change: `[en] Update from 2025-01-31`.
pub fn edit_summary(language: &str, date: NaiveDate) -> String {
    format!("[{language}] Update from {}", date.format("%Y-%m-%d"))
}

/// File name of a page: trimmed title with spaces as underscores.
///
/// Path separators and `%` are percent-encoded, so distinct titles only share
/// a file when they differ by space versus underscore, which the wiki treats
/// as the same page anyway.
pub fn page_file_name(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.trim().chars() {
        match c {
            ' ' => stem.push('_'),
            '%' => stem.push_str("%25"),
            '/' => stem.push_str("%2F"),
            '\\' => stem.push_str("%5C"),
            _ => stem.push(c),
        }
    }
    format!("{stem}.{PAGE_FILE_EXTENSION}")
}

/// Writes pages to `<output>/<language>/<Title>.wiki`.
#[derive(Debug, Clone)]
pub struct FilePublisher {
    output: PathBuf,
    date: NaiveDate,
    summaries: Vec<String>,
    claimed: HashMap<PathBuf, String>,
}

impl FilePublisher {
    /// Create a publisher rooted at `output`, dating summaries today.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_date(output, Local::now().date_naive())
    }

    /// Create a publisher with a fixed summary date.
    pub fn with_date(output: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            output: output.into(),
            date,
            summaries: Vec::new(),
            claimed: HashMap::new(),
        }
    }

    /// Path the page is written to.
    pub fn page_path(&self, page: &GeneratedPage) -> PathBuf {
        self.output.join(&page.language).join(page_file_name(&page.title))
    }

    /// Edit summaries of every created or updated page, in publish order.
    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }
}

impl PagePublisher for FilePublisher {
    async fn publish(&mut self, page: &GeneratedPage) -> Result<PublishOutcome> {
        let path = self.page_path(page);
        match self.claimed.get(&path) {
            Some(title) if *title != page.title => {
                bail!(
                    "Pages '{}' and '{}' both map to {}",
                    title,
                    page.title,
                    path.display()
                );
            }
            Some(_) => {}
            None => {
                self.claimed.insert(path.clone(), page.title.clone());
            }
        }

        let outcome = match tokio::fs::read_to_string(&path).await {
            Ok(existing) if existing == page.content => PublishOutcome::Unchanged,
            Ok(_) => PublishOutcome::Updated,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PublishOutcome::Created,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read existing page: {}", path.display()));
            }
        };

        if outcome == PublishOutcome::Unchanged {
            tracing::debug!("{} unchanged", path.display());
            return Ok(outcome);
        }

        atomic_write(&path, &page.content).await?;
        let summary = format!("{} ({})", edit_summary(&page.language, self.date), page.title);
        tracing::info!("{} {}", outcome, summary);
        self.summaries.push(summary);
        Ok(outcome)
    }
}

/// Write to a temporary sibling file, then rename it over `path`.
async fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, content)
        .await
        .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;
    tokio::fs::rename(&temp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;
    Ok(())
}

/// Logs pages instead of writing them; every page counts as created.
#[derive(Debug, Clone, Default)]
pub struct DryRunPublisher {
    published: Vec<(String, String)>,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(language, title)` of every page seen.
    pub fn published(&self) -> &[(String, String)] {
        &self.published
    }
}

impl PagePublisher for DryRunPublisher {
    async fn publish(&mut self, page: &GeneratedPage) -> Result<PublishOutcome> {
        tracing::info!("[dry run] [{}] {} ({} bytes)", page.language, page.title, page.content.len());
        self.published.push((page.language.clone(), page.title.clone()));
        Ok(PublishOutcome::Created)
    }
}

/// Count of pages per outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    counts: BTreeMap<PublishOutcome, usize>,
}

impl PublishReport {
    /// Number of pages with `outcome`.
    pub fn count(&self, outcome: PublishOutcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of pages published.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn record(&mut self, outcome: PublishOutcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }
}

/// Publish every page in order, stopping at the first failure.
pub async fn publish_all<P: PagePublisher>(publisher: &mut P, pages: &[GeneratedPage]) -> Result<PublishReport> {
    let mut report = PublishReport::default();
    for page in pages {
        let outcome = publisher
            .publish(page)
            .await
            .with_context(|| format!("Failed to publish [{}] {}", page.language, page.title))?;
        report.record(outcome);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page(language: &str, title: &str, content: &str) -> GeneratedPage {
        GeneratedPage {
            language: language.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_page_file_name() {
        assert_eq!(page_file_name(" Fire Temple "), "Fire_Temple.wiki");
        assert_eq!(page_file_name("Heroes/Red"), "Heroes%2FRed.wiki");
        assert_eq!(page_file_name("Fire\\Ice 100%"), "Fire%5CIce_100%25.wiki");
    }

    #[tokio::test]
    async fn test_slash_and_space_titles_get_distinct_files() -> Result<()> {
        let temp = TempDir::new()?;
        let mut publisher = FilePublisher::new(temp.path());
        let pages = vec![page("en", "Fire/Ice", "a"), page("en", "Fire Ice", "b")];

        let report = publish_all(&mut publisher, &pages).await?;

        assert_eq!(report.count(PublishOutcome::Created), 2);
        assert_eq!(tokio::fs::read_to_string(temp.path().join("en/Fire%2FIce.wiki")).await?, "a");
        assert_eq!(tokio::fs::read_to_string(temp.path().join("en/Fire_Ice.wiki")).await?, "b");
        Ok(())
    }

    #[tokio::test]
    async fn test_colliding_titles_fail() -> Result<()> {
        let temp = TempDir::new()?;
        let mut publisher = FilePublisher::new(temp.path());
        let pages = vec![page("en", "Fire Ice", "a"), page("en", "Fire_Ice", "b")];

        let error = publish_all(&mut publisher, &pages).await.unwrap_err();

        assert!(format!("{error:#}").contains("Pages 'Fire Ice' and 'Fire_Ice' both map to"));
        assert_eq!(tokio::fs::read_to_string(temp.path().join("en/Fire_Ice.wiki")).await?, "a");
        Ok(())
    }

    #[test]
    fn test_edit_summary() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(edit_summary("fr", date), "[fr] Update from 2025-01-31");
    }

    #[tokio::test]
    async fn test_file_publisher_outcomes() -> Result<()> {
        let temp = TempDir::new()?;
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let mut publisher = FilePublisher::with_date(temp.path(), date);

        let first = page("en", "Ember", "{{Hero}}");
        assert_eq!(publisher.publish(&first).await?, PublishOutcome::Created);
        let written = tokio::fs::read_to_string(temp.path().join("en/Ember.wiki")).await?;
        assert_eq!(written, "{{Hero}}");

        assert_eq!(publisher.publish(&first).await?, PublishOutcome::Unchanged);

        let changed = page("en", "Ember", "{{Hero|v2}}");
        assert_eq!(publisher.publish(&changed).await?, PublishOutcome::Updated);

        assert_eq!(
            publisher.summaries(),
            &[
                "[en] Update from 2025-01-31 (Ember)".to_string(),
                "[en] Update from 2025-01-31 (Ember)".to_string()
            ]
        );
        assert!(!temp.path().join("en/Ember.tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_all_report() -> Result<()> {
        let temp = TempDir::new()?;
        let mut publisher = FilePublisher::new(temp.path());
        let pages = vec![page("en", "Ember", "a"), page("fr", "Braise", "b"), page("en", "Ember", "a")];

        let report = publish_all(&mut publisher, &pages).await?;

        assert_eq!(report.total(), 3);
        assert_eq!(report.count(PublishOutcome::Created), 2);
        assert_eq!(report.count(PublishOutcome::Unchanged), 1);
        assert!(temp.path().join("fr/Braise.wiki").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() -> Result<()> {
        let mut publisher = DryRunPublisher::new();
        let report = publish_all(&mut publisher, &[page("en", "Ember", "a")]).await?;

        assert_eq!(report.count(PublishOutcome::Created), 1);
        assert_eq!(publisher.published(), &[("en".to_string(), "Ember".to_string())]);
        Ok(())
    }
}
