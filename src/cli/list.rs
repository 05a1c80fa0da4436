//! `wikigen list`: show the pages a `generate` run would produce.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{ProjectContext, resolve_config_path};
use crate::pages::GeneratedPage;

/// List page titles per language.
#[derive(Args, Debug, Default)]
pub struct ListCommand {
    /// Only list pages in this language (repeatable)
    #[arg(short, long = "language", value_name = "CODE")]
    pub languages: Vec<String>,
}

impl ListCommand {
    /// Run the command against the project at `config`.
    pub async fn execute(self, config: Option<PathBuf>) -> Result<()> {
        let project = ProjectContext::load(&resolve_config_path(config))?;
        let languages = project.select_languages(&self.languages)?;
        let pages = project.render(&languages)?;

        for line in format_listing(&pages) {
            println!("{line}");
        }
        Ok(())
    }
}

/// One heading per language followed by its titles. Pages arrive sorted.
fn format_listing(pages: &[GeneratedPage]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for page in pages {
        if current != Some(page.language.as_str()) {
            let count = pages.iter().filter(|p| p.language == page.language).count();
            lines.push(format!("{} ({count} pages)", page.language.bold()));
            current = Some(page.language.as_str());
        }
        lines.push(format!("  {}", page.title));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(language: &str, title: &str) -> GeneratedPage {
        GeneratedPage {
            language: language.to_string(),
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn test_listing_groups_by_language() {
        colored::control::set_override(false);
        let pages = vec![page("en", "Ember"), page("en", "Frost"), page("fr", "Braise")];

        assert_eq!(
            format_listing(&pages),
            vec!["en (2 pages)", "  Ember", "  Frost", "fr (1 pages)", "  Braise"]
        );
    }
}
