//! Languages and word translation.
//!
//! A language file is a YAML document:
//!
//! ```yaml
//! Name: Français
//! Code: fr
//! Translations:
//!   Heroes:
//!     Ember: Braise
//!   Colors:
//!     Red: Rouge
//!   General:
//!     and: et
//! ```
//!
//! The sections are flattened into one translation table. Sections are merged
//! in a fixed order ([`SECTION_ORDER`], then any other section in document
//! order); when two sections define the same word the later one wins and a
//! warning is logged.
//!
//! Translation never fails: an unknown word is returned unchanged and a
//! warning names the language file that needs updating.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value as YamlValue};
use std::collections::HashMap;
use std::path::Path;

use crate::core::WikigenError;

/// Order in which translation sections are merged.
pub const SECTION_ORDER: &[&str] =
    &["Heroes", "Classes", "AI", "Colors", "Species", "Talents", "Gear", "General"];

#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Translations")]
    translations: Option<Mapping>,
}

/// A wiki language: its code, display name and flat translation table.
#[derive(Debug, Clone)]
pub struct Language {
    /// Language code, also used as the interlanguage link prefix (`en`, `fr`)
    pub code: String,
    /// Human readable name
    pub name: String,
    translations: HashMap<String, String>,
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl Language {
    /// Build a language from an already flattened translation table.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        translations: HashMap<String, String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            translations,
        }
    }

    /// Load a language from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read language file: {}", path.display()))?;
        let language = Self::from_yaml_str(&content, &path.display().to_string())?;
        tracing::info!("Language {} loaded", language.name);
        Ok(language)
    }

    /// Parse a language document. `source` names the document in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> Result<Self, WikigenError> {
        let file: LanguageFile =
            serde_yaml::from_str(content).map_err(|e| WikigenError::ConfigParseError {
                file: source.to_string(),
                reason: e.to_string(),
            })?;

        let invalid = |reason: &str| WikigenError::InvalidLanguage {
            file: source.to_string(),
            reason: reason.to_string(),
        };
        let name = file.name.filter(|n| !n.is_empty()).ok_or_else(|| invalid("missing Name"))?;
        let code = file.code.filter(|c| !c.is_empty()).ok_or_else(|| invalid("missing Code"))?;
        let sections = file.translations.ok_or_else(|| invalid("missing Translations"))?;

        let translations = merge_sections(&code, &sections);
        Ok(Self {
            code,
            name,
            translations,
        })
    }

    /// Translate a word, falling back to the word itself.
    pub fn translate(&self, word: &str) -> String {
        match self.translations.get(word) {
            Some(translated) => translated.clone(),
            None => {
                tracing::warn!(
                    "{} translation cannot be found, please update language_{}",
                    word,
                    self.code
                );
                word.to_string()
            }
        }
    }

    /// Whether the table holds a translation for `word`.
    pub fn has_translation(&self, word: &str) -> bool {
        self.translations.contains_key(word)
    }

    /// Number of words in the translation table.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether the translation table is empty.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

fn merge_sections(code: &str, sections: &Mapping) -> HashMap<String, String> {
    let mut ordered: Vec<(&str, &YamlValue)> = Vec::new();
    for wanted in SECTION_ORDER {
        if let Some(section) = sections.get(*wanted) {
            ordered.push((*wanted, section));
        }
    }
    for (key, section) in sections {
        if let Some(key) = key.as_str()
            && !SECTION_ORDER.contains(&key)
        {
            ordered.push((key, section));
        }
    }

    let mut translations = HashMap::new();
    for (section_name, section) in ordered {
        let Some(entries) = section.as_mapping() else {
            // An empty section (`Gear:` with nothing under it) parses as null
            if !section.is_null() {
                tracing::warn!("Section {} of language_{} is not a mapping", section_name, code);
            }
            continue;
        };
        for (word, translated) in entries {
            let (Some(word), Some(translated)) = (yaml_scalar(word), yaml_scalar(translated))
            else {
                tracing::warn!("Skipping non-scalar entry in section {} of language_{}", section_name, code);
                continue;
            };
            if let Some(previous) = translations.insert(word.clone(), translated) {
                tracing::warn!(
                    "Translation of '{}' defined twice in language_{} (section {} overrides '{}')",
                    word,
                    code,
                    section_name,
                    previous
                );
            }
        }
    }
    translations
}

fn yaml_scalar(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRENCH: &str = r#"
Name: Français
Code: fr
Translations:
  General:
    and: et
    Red: Rouge générique
  Colors:
    Red: Rouge
  Heroes:
    Ember: Braise
  Gear:
"#;

    #[test]
    fn test_load_language_merges_sections() {
        let language = Language::from_yaml_str(FRENCH, "language_fr.yml").unwrap();
        assert_eq!(language.code, "fr");
        assert_eq!(language.name, "Français");
        assert_eq!(language.translate("Ember"), "Braise");
        assert_eq!(language.translate("and"), "et");
        assert_eq!(language.len(), 3);
    }

    #[test]
    fn test_later_section_wins_on_collision() {
        // General is merged after Colors regardless of document order
        let language = Language::from_yaml_str(FRENCH, "language_fr.yml").unwrap();
        assert_eq!(language.translate("Red"), "Rouge générique");
    }

    #[test]
    fn test_unknown_word_is_returned_unchanged() {
        let language = Language::from_yaml_str(FRENCH, "language_fr.yml").unwrap();
        assert_eq!(language.translate("Dragon Slayer"), "Dragon Slayer");
        assert!(!language.has_translation("Dragon Slayer"));
    }

    #[test]
    fn test_translation_is_deterministic() {
        let language = Language::from_yaml_str(FRENCH, "language_fr.yml").unwrap();
        let first = language.translate("Ember");
        assert_eq!(language.translate("Ember"), first);
    }

    #[test]
    fn test_missing_code_is_rejected() {
        let result = Language::from_yaml_str("Name: English\nTranslations: {}\n", "language_en.yml");
        assert!(matches!(result, Err(WikigenError::InvalidLanguage { .. })));
    }

    #[test]
    fn test_missing_translations_is_rejected() {
        let result = Language::from_yaml_str("Name: English\nCode: en\n", "language_en.yml");
        match result {
            Err(WikigenError::InvalidLanguage {
                reason,
                ..
            }) => assert_eq!(reason, "missing Translations"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_languages_compare_by_code() {
        let a = Language::new("en", "English", HashMap::new());
        let b = Language::new("en", "English (copy)", HashMap::new());
        assert_eq!(a, b);
    }
}
