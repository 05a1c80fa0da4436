//! Element and page template definitions.
//!
//! `elements_templates.yml` maps an element name to its template kinds:
//!
//! ```yaml
//! trait:
//!   template: "{{Trait|//value//}}"
//!   translated_template: "{{Trait|//value//|//translated.value//}}"
//!   no_text_template: "{{Trait|//value//|NoText=1}}"
//! ```
//!
//! `pages_templates.yml` maps a page template name to its definition:
//!
//! ```yaml
//! Hero pages:
//!   base object: hero
//!   type: single
//!   title: "//translated.name//"
//!   header: "__NOTOC__"
//!   template: "**hero_infobox.template**"
//! ```
//!
//! Every page field is optional at load time. An incomplete definition is
//! rejected by [`PageTemplate::check`] when pages are assembled, so one broken
//! definition only skips its own pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Named element templates: `name → kind → template`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementsTemplates(BTreeMap<String, BTreeMap<String, String>>);

impl ElementsTemplates {
    /// Wrap an already built template table.
    pub fn new(templates: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self(templates)
    }

    /// Parse an `elements_templates.yml` document.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Template `kind` of element `name`.
    pub fn get(&self, name: &str, kind: &str) -> Option<&str> {
        self.0.get(name)?.get(kind).map(String::as_str)
    }

    /// Template addressed by a dotted `name.kind` key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let (name, kind) = key.split_once('.')?;
        self.get(name, kind)
    }

    /// Whether an element with this name exists.
    pub fn contains_element(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// All element names, sorted.
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every `(name, kind, template)` triple.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.0.iter().flat_map(|(name, kinds)| {
            kinds.iter().map(move |(kind, template)| (name.as_str(), kind.as_str(), template.as_str()))
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no element is defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rendering mode of a page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// One page per entity
    #[serde(rename = "single")]
    Single,
    /// One page aggregating every entity
    #[serde(rename = "full list")]
    FullList,
    /// Any other value; the page template is skipped
    #[serde(other)]
    Unknown,
}

/// A page template definition as written in `pages_templates.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    /// Entity kind, optionally followed by a sub-path (`hero`, `hero.display`)
    #[serde(rename = "base object", alias = "base_object", default)]
    pub base_object: Option<String>,
    /// `single` or `full list`
    #[serde(rename = "type", default)]
    pub kind: Option<PageKind>,
    /// Page body
    #[serde(default)]
    pub template: Option<String>,
    /// Page title, may contain `//path//` macros
    #[serde(default)]
    pub title: Option<String>,
    /// Text placed before the body
    #[serde(default)]
    pub header: Option<String>,
    /// Text placed after the body
    #[serde(default)]
    pub footer: Option<String>,
}

/// Why a page template cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageTemplateError {
    /// A mandatory field is absent or empty
    #[error("{field} missing in {template}, please check pages_templates.yml and run again")]
    MissingField {
        /// Page template name
        template: String,
        /// Missing field name
        field: &'static str,
    },

    /// The `type` field is absent or not one of `single` / `full list`
    #[error("type missing in {template}, please check pages_templates.yml and run again")]
    InvalidType {
        /// Page template name
        template: String,
    },
}

/// Entity kind selector plus optional sub-path, parsed from `base object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseObjectSelector {
    /// Entity kind name (`hero`, `pet`, `heroclass`, `talent`, `map`)
    pub kind: String,
    /// Path resolved on the entity tree, if any
    pub sub_path: Option<String>,
}

impl BaseObjectSelector {
    /// Parse `hero` or `hero.some.path`.
    pub fn parse(selector: &str) -> Self {
        match selector.split_once('.') {
            Some((kind, rest)) if !rest.is_empty() => Self {
                kind: kind.to_string(),
                sub_path: Some(rest.to_string()),
            },
            Some((kind, _)) => Self {
                kind: kind.to_string(),
                sub_path: None,
            },
            None => Self {
                kind: selector.to_string(),
                sub_path: None,
            },
        }
    }
}

/// A page template whose mandatory fields are all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedPageTemplate<'a> {
    /// Page template name
    pub name: &'a str,
    /// Base object selector
    pub base: BaseObjectSelector,
    /// Single or full list
    pub kind: PageKind,
    /// Page body
    pub template: &'a str,
    /// Page title
    pub title: &'a str,
    /// Optional header
    pub header: Option<&'a str>,
    /// Optional footer
    pub footer: Option<&'a str>,
}

impl PageTemplate {
    /// Verify that the definition can be rendered.
    pub fn check<'a>(&'a self, name: &'a str) -> Result<CheckedPageTemplate<'a>, PageTemplateError> {
        let missing = |field: &'static str| PageTemplateError::MissingField {
            template: name.to_string(),
            field,
        };

        let base_object =
            self.base_object.as_deref().filter(|s| !s.is_empty()).ok_or_else(|| missing("base object"))?;
        let template = self.template.as_deref().filter(|s| !s.is_empty()).ok_or_else(|| missing("template"))?;
        let title = self.title.as_deref().filter(|s| !s.is_empty()).ok_or_else(|| missing("title"))?;
        let kind = match self.kind {
            Some(kind @ (PageKind::Single | PageKind::FullList)) => kind,
            _ => {
                return Err(PageTemplateError::InvalidType {
                    template: name.to_string(),
                });
            }
        };

        Ok(CheckedPageTemplate {
            name,
            base: BaseObjectSelector::parse(base_object),
            kind,
            template,
            title,
            header: self.header.as_deref().filter(|s| !s.is_empty()),
            footer: self.footer.as_deref().filter(|s| !s.is_empty()),
        })
    }
}

/// Named page templates, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PagesTemplates(BTreeMap<String, PageTemplate>);

impl PagesTemplates {
    /// Wrap an already built table.
    pub fn new(templates: BTreeMap<String, PageTemplate>) -> Self {
        Self(templates)
    }

    /// Parse a `pages_templates.yml` document.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Every `(name, definition)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageTemplate)> {
        self.0.iter().map(|(name, template)| (name.as_str(), template))
    }

    /// Number of page templates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no page template is defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
