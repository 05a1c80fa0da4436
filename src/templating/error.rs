//! Macro-level expansion problems.
//!
//! A [`MacroIssue`] never aborts expansion. The offending macro is left in the
//! output exactly as written, the issue is logged at `error` level and
//! collected in the [`Expansion`](super::Expansion) report.

use thiserror::Error;

/// One macro the expander could not replace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroIssue {
    /// `**...**` content that is not exactly `Name.Kind`
    #[error("Malformed element reference **{reference}**, expected **Name.Kind**")]
    MalformedReference {
        /// Text between the asterisks
        reference: String,
    },

    /// No element with this name exists
    #[error("{}", unknown_element_message(.name, .suggestions))]
    UnknownElement {
        /// Requested element name
        name: String,
        /// Requested kind
        kind: String,
        /// Closest existing element names
        suggestions: Vec<String>,
    },

    /// The element exists but has no template of this kind
    #[error("Element {name} has no template named {kind}")]
    UnknownKind {
        /// Element name
        name: String,
        /// Requested kind
        kind: String,
    },

    /// `//path//` resolved to no usable value
    #[error("Unable to resolve //{path}// on the base object")]
    UnresolvedValue {
        /// Path between the slashes, including any `translated.` prefix
        path: String,
    },

    /// Element references nested deeper than the expansion limit
    #[error("Element reference **{reference}** nested deeper than {depth} levels, left unexpanded")]
    DepthExceeded {
        /// Reference that was not expanded
        reference: String,
        /// Depth limit that was hit
        depth: usize,
    },
}

fn unknown_element_message(name: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("{name} not found in elements_templates")
    } else {
        format!("{name} not found in elements_templates (did you mean: {}?)", suggestions.join(", "))
    }
}

impl MacroIssue {
    /// The macro text left in the output for this issue.
    pub fn original_markup(&self) -> String {
        match self {
            Self::MalformedReference {
                reference,
            }
            | Self::DepthExceeded {
                reference,
                ..
            } => format!("**{reference}**"),
            Self::UnknownElement {
                name,
                kind,
                ..
            }
            | Self::UnknownKind {
                name,
                kind,
            } => format!("**{name}.{kind}**"),
            Self::UnresolvedValue {
                path,
            } => format!("//{path}//"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_element_message_lists_suggestions() {
        let issue = MacroIssue::UnknownElement {
            name: "trai".to_string(),
            kind: "template".to_string(),
            suggestions: vec!["trait".to_string()],
        };
        assert_eq!(issue.to_string(), "trai not found in elements_templates (did you mean: trait?)");
    }

    #[test]
    fn test_unknown_element_message_without_suggestions() {
        let issue = MacroIssue::UnknownElement {
            name: "Ghost".to_string(),
            kind: "template".to_string(),
            suggestions: vec![],
        };
        assert_eq!(issue.to_string(), "Ghost not found in elements_templates");
    }

    #[test]
    fn test_original_markup() {
        let issue = MacroIssue::UnresolvedValue {
            path: "translated.name".to_string(),
        };
        assert_eq!(issue.original_markup(), "//translated.name//");
    }
}
