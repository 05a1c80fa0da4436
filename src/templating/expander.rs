//! Recursive macro expansion.

use regex::Captures;
use serde_json::Value;
use strsim::levenshtein;

use super::error::MacroIssue;
use super::syntax::{ELEMENT_PATTERN, TRANSLATED_PREFIX, VALUE_PATTERN, quoted_literal, split_reference};
use crate::attributes;
use crate::config::ElementsTemplates;
use crate::constants::{MAX_EXPANSION_DEPTH, SIMILARITY_THRESHOLD_PERCENT};
use crate::language::Language;

/// Result of expanding one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Expanded text; unresolvable macros are left as written
    pub text: String,
    /// Every macro that could not be replaced, in order of discovery
    pub issues: Vec<MacroIssue>,
}

impl Expansion {
    /// Whether every macro was replaced.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Expands `**Name.Kind**` and `//path//` macros against a base object.
///
/// The expander holds no state besides the element template table; the base
/// object and the active language are passed to every call.
#[derive(Debug, Clone, Copy)]
pub struct TemplateExpander<'a> {
    elements: &'a ElementsTemplates,
}

impl<'a> TemplateExpander<'a> {
    /// Create an expander over an element template table.
    pub fn new(elements: &'a ElementsTemplates) -> Self {
        Self {
            elements,
        }
    }

    /// The element templates macros are looked up in.
    pub fn elements(&self) -> &'a ElementsTemplates {
        self.elements
    }

    /// Expand the element template `template_key` (`name.kind`) against `attribute`.
    ///
    /// Line breaks embedded in the template are removed first. A missing key
    /// logs an error and yields an empty string.
    pub fn transform(&self, attribute: &Value, template_key: &str, language: &Language) -> String {
        let Some(template) = self.elements.lookup(template_key) else {
            tracing::error!("{} not found in elements_templates", template_key);
            return String::new();
        };
        self.process(&strip_line_breaks(template), attribute, language)
    }

    /// Expand `template` against `base`, returning only the text.
    pub fn process(&self, template: &str, base: &Value, language: &Language) -> String {
        self.expand(template, base, language).text
    }

    /// Expand `template` against `base`.
    ///
    /// Element references are expanded first, recursively and against the same
    /// base object, then value references are resolved over the result.
    pub fn expand(&self, template: &str, base: &Value, language: &Language) -> Expansion {
        let mut issues = Vec::new();
        let with_elements = self.expand_elements(template, 0, &mut issues);
        let text = expand_values(&with_elements, base, language, &mut issues);

        for issue in &issues {
            tracing::error!("{}", issue);
        }

        Expansion {
            text,
            issues,
        }
    }

    /// Resolve value references only, leaving element references as written.
    ///
    /// Page titles go through this pass alone.
    pub fn resolve_values(&self, template: &str, base: &Value, language: &Language) -> Expansion {
        let mut issues = Vec::new();
        let text = expand_values(template, base, language, &mut issues);

        for issue in &issues {
            tracing::error!("{}", issue);
        }

        Expansion {
            text,
            issues,
        }
    }

    fn expand_elements(&self, template: &str, depth: usize, issues: &mut Vec<MacroIssue>) -> String {
        if !ELEMENT_PATTERN.is_match(template) {
            return template.to_string();
        }

        ELEMENT_PATTERN
            .replace_all(template, |caps: &Captures| {
                let whole = caps[0].to_string();
                let reference = &caps[1];

                let Some((name, kind)) = split_reference(reference) else {
                    issues.push(MacroIssue::MalformedReference {
                        reference: reference.to_string(),
                    });
                    return whole;
                };

                let Some(nested) = self.elements.get(name, kind) else {
                    issues.push(self.missing_element_issue(name, kind));
                    return whole;
                };

                if depth >= MAX_EXPANSION_DEPTH {
                    issues.push(MacroIssue::DepthExceeded {
                        reference: reference.to_string(),
                        depth: MAX_EXPANSION_DEPTH,
                    });
                    return whole;
                }

                self.expand_elements(nested, depth + 1, issues)
            })
            .into_owned()
    }

    fn missing_element_issue(&self, name: &str, kind: &str) -> MacroIssue {
        if self.elements.contains_element(name) {
            return MacroIssue::UnknownKind {
                name: name.to_string(),
                kind: kind.to_string(),
            };
        }
        MacroIssue::UnknownElement {
            name: name.to_string(),
            kind: kind.to_string(),
            suggestions: find_similar_elements(name, self.elements.element_names()),
        }
    }
}

fn expand_values(text: &str, base: &Value, language: &Language, issues: &mut Vec<MacroIssue>) -> String {
    if !VALUE_PATTERN.is_match(text) {
        return text.to_string();
    }

    VALUE_PATTERN
        .replace_all(text, |caps: &Captures| {
            let path = &caps[1];
            match resolve_value(path, base, language) {
                Some(value) => value,
                None => {
                    issues.push(MacroIssue::UnresolvedValue {
                        path: path.to_string(),
                    });
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

fn resolve_value(path: &str, base: &Value, language: &Language) -> Option<String> {
    if let Some(rest) = path.strip_prefix(TRANSLATED_PREFIX) {
        if let Some(literal) = quoted_literal(rest) {
            return Some(language.translate(literal));
        }
        let word = lookup(base, rest).and_then(attributes::stringify).filter(|w| !w.is_empty())?;
        return Some(language.translate(&word));
    }

    lookup(base, path).and_then(attributes::stringify)
}

/// A scalar base object stands for itself whatever the path.
fn lookup<'v>(base: &'v Value, path: &str) -> Option<&'v Value> {
    match base {
        Value::Object(_) | Value::Array(_) => attributes::get(base, path),
        Value::Null => None,
        scalar => Some(scalar),
    }
}

/// Remove embedded line breaks and surrounding whitespace from a template.
pub fn strip_line_breaks(template: &str) -> String {
    template.replace('\n', "").replace("<br />", "").replace("<br>", "").trim().to_string()
}

fn find_similar_elements<'n>(target: &str, available: impl Iterator<Item = &'n str>) -> Vec<String> {
    let mut scored: Vec<_> = available.map(|name| (name, levenshtein(target, name))).collect();

    scored.sort_by_key(|(_, dist)| *dist);

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(name, _)| name.to_string())
        .collect()
}
