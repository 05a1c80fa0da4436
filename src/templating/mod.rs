//! Wiki markup macro language.
//!
//! Templates are plain wiki markup carrying two kinds of macros:
//!
//! - `**Name.Kind**` is replaced by the `Kind` template of element `Name`
//!   from `elements_templates.yml`, itself expanded against the same base
//!   object. Element templates may nest up to
//!   [`MAX_EXPANSION_DEPTH`](crate::constants::MAX_EXPANSION_DEPTH) levels.
//! - `//path//` is replaced by the value found at `path` on the base object.
//!   With a `translated.` prefix the value, or a quoted literal such as
//!   `//translated.'Totals'//`, goes through the active language first.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use std::collections::HashMap;
//! use wikigen_cli::config::ElementsTemplates;
//! use wikigen_cli::language::Language;
//! use wikigen_cli::templating::TemplateExpander;
//!
//! let elements = ElementsTemplates::from_yaml_str("color:\n  template: '{{Color|//color//}}'\n").unwrap();
//! let language = Language::new("en", "English", HashMap::new());
//! let expander = TemplateExpander::new(&elements);
//!
//! let hero = json!({ "name": "Ember", "color": "Red" });
//! let text = expander.process("//name// **color.template**", &hero, &language);
//! assert_eq!(text, "Ember {{Color|Red}}");
//! ```
//!
//! # Failure handling
//!
//! Expansion never fails. A macro that cannot be replaced stays in the output
//! as written and is reported as a [`MacroIssue`], so one broken template only
//! shows up as visible markup on the affected page.

mod error;
mod expander;
pub mod syntax;

pub use error::MacroIssue;
pub use expander::{Expansion, TemplateExpander, strip_line_breaks};

#[cfg(test)]
mod expander_tests;
