//! Project configuration (`wikigen.toml`).
//!
//! ```toml
//! [paths]
//! dataset = "data/dataset.yml"
//! elements_templates = "templates/elements_templates.yml"
//! pages_templates = "templates/pages_templates.yml"
//! languages = ["languages/language_en.yml", "languages/language_fr.yml"]
//! output = "output"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file,
//! so the tool behaves the same from any working directory.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parser::{parse_config, parse_yaml};
use super::templates::{ElementsTemplates, PagesTemplates};
use crate::core::WikigenError;
use crate::language::Language;

/// File locations of a wikigen project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Entity dataset (YAML)
    pub dataset: PathBuf,
    /// Element templates (YAML)
    pub elements_templates: PathBuf,
    /// Page templates (YAML)
    pub pages_templates: PathBuf,
    /// Language files (YAML), in the order languages are processed
    #[serde(default)]
    pub languages: Vec<PathBuf>,
    /// Directory receiving generated pages
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

/// Parsed `wikigen.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// File locations
    pub paths: PathsConfig,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,
}

impl ProjectConfig {
    /// Load the project configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WikigenError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let mut config: Self = parse_config(path)?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!("Loaded project configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Absolute location of the output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    /// Load both template files.
    pub fn load_templates(&self) -> Result<(ElementsTemplates, PagesTemplates)> {
        let elements: ElementsTemplates = parse_yaml(&self.resolve(&self.paths.elements_templates))?;
        let pages: PagesTemplates = parse_yaml(&self.resolve(&self.paths.pages_templates))?;
        tracing::info!("Loaded {} element templates and {} page templates", elements.len(), pages.len());
        Ok((elements, pages))
    }

    /// Load every configured language, in configuration order.
    pub fn load_languages(&self) -> Result<Vec<Language>> {
        self.paths.languages.iter().map(|path| Language::load(&self.resolve(path))).collect()
    }
}
