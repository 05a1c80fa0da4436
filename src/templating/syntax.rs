//! Macro syntax shared by the expander and the configuration validator.
//!
//! Two macro forms exist:
//! - `**Name.Kind**` references the `Kind` template of element `Name`
//! - `//path//` interpolates a value from the base object, optionally through
//!   the translation table with a `translated.` prefix

use regex::Regex;
use std::sync::LazyLock;

/// Prefix routing a value reference through the active language.
pub const TRANSLATED_PREFIX: &str = "translated.";

/// `**Name.Kind**`
pub static ELEMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("element macro pattern is valid"));

/// `//path//`
pub static VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//([^/]+)//").expect("value macro pattern is valid"));

/// Split an element reference into `(name, kind)`.
///
/// Returns `None` unless the reference has exactly two dot-separated parts.
pub fn split_reference(reference: &str) -> Option<(&str, &str)> {
    let mut parts = reference.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(kind), None) if !name.is_empty() && !kind.is_empty() => {
            Some((name, kind))
        }
        _ => None,
    }
}

/// All element references found in `text`, in order of appearance.
pub fn element_references(text: &str) -> Vec<&str> {
    ELEMENT_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Strip one level of matching single or double quotes.
pub fn quoted_literal(text: &str) -> Option<&str> {
    let quoted = text.len() >= 2
        && ((text.starts_with('\'') && text.ends_with('\''))
            || (text.starts_with('"') && text.ends_with('"')));
    quoted.then(|| &text[1..text.len() - 1])
}

/// Whether `text` still contains anything that looks like a macro.
pub fn has_macros(text: &str) -> bool {
    ELEMENT_PATTERN.is_match(text) || VALUE_PATTERN.is_match(text)
}
