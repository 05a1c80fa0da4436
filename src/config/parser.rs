//! Generic configuration parsing utilities.
//!
//! Project settings live in TOML (`wikigen.toml`); template definitions,
//! languages and the entity dataset are YAML documents. Both parsers work with
//! any `DeserializeOwned` type and attach the file path to every error:
//!
//! ```text
//! Failed to parse config file: /path/to/wikigen.toml
//! Caused by:
//!     invalid TOML value, expected string
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Examples
///
/// ```rust,no_run
/// use wikigen_cli::config::parse_config;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Config {
///     name: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let config: Config = parse_config(Path::new("wikigen.toml"))?;
/// println!("Loaded {}", config.name);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Parse a YAML document into the specified type.
pub fn parse_yaml<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read YAML file: {}", path.display()))?;

    let document: T = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let config_path = temp.path().join("test.toml");

        #[derive(serde::Deserialize)]
        struct TestConfig {
            name: String,
            value: i32,
        }

        let toml_content = r#"
            name = "test"
            value = 42
        "#;

        std::fs::write(&config_path, toml_content).unwrap();

        let config: TestConfig = parse_config(&config_path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn test_parse_config_error_mentions_path() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let config_path = temp.path().join("invalid.toml");

        #[derive(serde::Deserialize)]
        struct TestConfig {
            #[allow(dead_code)] // Field used by serde for deserialization validation, not accessed directly
            name: String,
        }

        std::fs::write(&config_path, "invalid = toml {").unwrap();

        let result: Result<TestConfig> = parse_config(&config_path);
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("invalid.toml"));
    }

    #[test]
    fn test_parse_yaml() {
        use std::collections::BTreeMap;
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let path = temp.path().join("templates.yml");
        std::fs::write(&path, "trait:\n  template: '{{Trait|//value//}}'\n").unwrap();

        let parsed: BTreeMap<String, BTreeMap<String, String>> = parse_yaml(&path).unwrap();
        assert_eq!(parsed["trait"]["template"], "{{Trait|//value//}}");
    }

    #[test]
    fn test_parse_yaml_missing_file() {
        let result: Result<serde_yaml::Value> = parse_yaml(Path::new("/nonexistent/file.yml"));
        assert!(result.is_err());
    }
}
