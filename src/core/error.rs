//! Error handling for wikigen
//!
//! This module provides the error types and user-friendly error reporting for
//! the wiki generator. The error system follows two rules:
//! 1. **Strongly-typed errors** ([`WikigenError`]) for failures that stop a run
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!
//! Failures that only affect one macro or one page (an unknown element
//! template, a missing value, an incomplete page definition) are *not*
//! represented here. They are logged and recovered locally by the template
//! expander and the page assembler so that one bad template never blocks the
//! rest of the corpus.
//!
//! # Examples
//!
//! ```rust,no_run
//! use wikigen_cli::core::{WikigenError, user_friendly_error};
//!
//! let error = anyhow::Error::from(WikigenError::ConfigNotFound {
//!     path: "wikigen.toml".to_string(),
//! });
//! let ctx = user_friendly_error(error);
//! ctx.display(); // colored error with suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for wikigen operations.
///
/// Every variant stops the current command. Macro- and page-level problems
/// are reported through [`crate::templating::MacroIssue`] instead.
#[derive(Error, Debug)]
pub enum WikigenError {
    /// Project configuration file not found
    #[error("Configuration file '{path}' not found")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// A configuration or template file could not be parsed
    #[error("Invalid configuration syntax in {file}")]
    ConfigParseError {
        /// File that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// Element templates reference each other in a loop
    #[error("Template reference cycle detected: {chain}")]
    TemplateCycle {
        /// Rendered cycle, e.g. `trait.template → color.template → trait.template`
        chain: String,
    },

    /// A language file is missing one of its mandatory sections
    #[error("Language file '{file}' is invalid: {reason}")]
    InvalidLanguage {
        /// Language file path
        file: String,
        /// Which part is missing or malformed
        reason: String,
    },

    /// The entity dataset is inconsistent
    #[error("Invalid dataset entry {entity}: {reason}")]
    InvalidDataset {
        /// Entity the problem was found on
        entity: String,
        /// What is wrong with it
        reason: String,
    },

    /// A language code given on the command line is not configured
    #[error("Language '{code}' is not configured")]
    UnknownLanguage {
        /// Requested language code
        code: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error wrapper adding a suggestion and details for terminal display.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: WikigenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details.
    #[must_use]
    pub const fn new(error: WikigenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion when the
/// failure is one we recognise.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(wikigen_error) = error.downcast_ref::<WikigenError>() {
        return create_error_context(wikigen_error, &error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::NotFound {
            return ErrorContext::new(WikigenError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check that the file or directory exists and the path is correct");
        }
    }

    if let Some(yaml_error) = error.downcast_ref::<serde_yaml::Error>() {
        return ErrorContext::new(WikigenError::ConfigParseError {
            file: "YAML document".to_string(),
            reason: yaml_error.to_string(),
        })
        .with_suggestion("Check the YAML syntax: indentation, quoting and list markers")
        .with_details(format!("{error:#}"));
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(WikigenError::ConfigParseError {
            file: "wikigen.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in wikigen.toml. Verify quotes and brackets");
    }

    ErrorContext::new(WikigenError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &WikigenError, chain: &anyhow::Error) -> ErrorContext {
    let context = match error {
        WikigenError::ConfigNotFound {
            path,
        } => ErrorContext::new(WikigenError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion("Create a wikigen.toml file or pass --config <PATH>"),
        WikigenError::ConfigParseError {
            file,
            reason,
        } => ErrorContext::new(WikigenError::ConfigParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_details(reason.clone()),
        WikigenError::TemplateCycle {
            chain,
        } => ErrorContext::new(WikigenError::TemplateCycle {
            chain: chain.clone(),
        })
        .with_suggestion("Remove one of the **Name.Kind** references that closes the loop")
        .with_details("Element templates are expanded recursively and must not reference themselves"),
        WikigenError::InvalidLanguage {
            file,
            reason,
        } => ErrorContext::new(WikigenError::InvalidLanguage {
            file: file.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("A language file needs Name, Code and Translations keys"),
        WikigenError::InvalidDataset {
            entity,
            reason,
        } => ErrorContext::new(WikigenError::InvalidDataset {
            entity: entity.clone(),
            reason: reason.clone(),
        })
        .with_suggestion("Fix the dataset entry and run again"),
        WikigenError::UnknownLanguage {
            code,
        } => ErrorContext::new(WikigenError::UnknownLanguage {
            code: code.clone(),
        })
        .with_suggestion("Add the language file to [paths].languages in wikigen.toml"),
        other => ErrorContext::new(WikigenError::Other {
            message: other.to_string(),
        }),
    };

    // Keep the anyhow context chain visible when the error was wrapped
    if context.details.is_none() && chain.chain().count() > 1 {
        context.with_details(format!("{chain:#}"))
    } else {
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_context_display_includes_suggestion() {
        let ctx = ErrorContext::new(WikigenError::ConfigNotFound {
            path: "wikigen.toml".to_string(),
        })
        .with_suggestion("create it");

        let rendered = ctx.to_string();
        assert!(rendered.contains("Configuration file 'wikigen.toml' not found"));
        assert!(rendered.contains("Suggestion: create it"));
    }

    #[test]
    fn test_user_friendly_error_for_cycle() {
        let error = anyhow::Error::from(WikigenError::TemplateCycle {
            chain: "a.x → b.y → a.x".to_string(),
        });
        let ctx = user_friendly_error(error);

        assert!(matches!(ctx.error, WikigenError::TemplateCycle { .. }));
        assert!(ctx.suggestion.is_some());
    }

    #[test]
    fn test_user_friendly_error_keeps_context_chain() {
        let result: anyhow::Result<()> = Err(WikigenError::UnknownLanguage {
            code: "de".to_string(),
        })
        .context("Failed to select languages");

        let ctx = user_friendly_error(result.unwrap_err());
        assert!(matches!(ctx.error, WikigenError::UnknownLanguage { .. }));
        assert!(ctx.details.unwrap().contains("Failed to select languages"));
    }

    #[test]
    fn test_user_friendly_error_fallback() {
        let ctx = user_friendly_error(anyhow::anyhow!("something odd"));
        assert_eq!(ctx.error.to_string(), "something odd");
    }
}
