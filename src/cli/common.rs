//! Shared loading logic for CLI commands.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{ElementsTemplates, PagesTemplates, ProjectConfig, validate_references};
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::core::WikigenError;
use crate::entities::{Dataset, EntitySet};
use crate::language::Language;
use crate::pages::{GeneratedPage, generate_pages};

/// `--config` when given, otherwise `wikigen.toml` in the working directory.
pub fn resolve_config_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Everything a command needs, loaded from one project configuration.
#[derive(Debug)]
pub struct ProjectContext {
    /// Parsed `wikigen.toml`
    pub config: ProjectConfig,
    pub elements: ElementsTemplates,
    pub pages: PagesTemplates,
    pub languages: Vec<Language>,
    pub dataset: Dataset,
}

impl ProjectContext {
    /// Load the configuration and every file it points to.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = ProjectConfig::load(config_path)?;
        let (elements, pages) = config.load_templates()?;
        let languages = config.load_languages()?;
        let dataset_path = config.resolve(&config.paths.dataset);
        let dataset = Dataset::load(&dataset_path)
            .with_context(|| format!("Failed to load dataset: {}", dataset_path.display()))?;

        Ok(Self {
            config,
            elements,
            pages,
            languages,
            dataset,
        })
    }

    /// Languages matching `codes`, or every language when `codes` is empty.
    pub fn select_languages(&self, codes: &[String]) -> Result<Vec<Language>> {
        if codes.is_empty() {
            return Ok(self.languages.clone());
        }

        codes
            .iter()
            .map(|code| {
                self.languages.iter().find(|l| &l.code == code).cloned().ok_or_else(|| {
                    WikigenError::UnknownLanguage {
                        code: code.clone(),
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Check template references, then render every page in `languages`.
    ///
    /// Interlanguage links always cover every configured language, even when
    /// only some are rendered.
    pub fn render(&self, languages: &[Language]) -> Result<Vec<GeneratedPage>> {
        validate_references(&self.elements, &self.pages)?;

        let mut entities: EntitySet = self.dataset.clone().into_entities();
        Ok(generate_pages(&mut entities, &self.elements, &self.pages, languages, &self.languages))
    }
}
