//! Page assembly.
//!
//! For one language, [`PageAssembler::process_all_templates`] refreshes the
//! display data of every entity, then renders each page template against the
//! entities of its base-object kind:
//!
//! - `single` templates emit one page per entity;
//! - `full list` templates join the rendered rows of every entity with `\n`
//!   and emit exactly one page.
//!
//! The page body is wrapped with the optional header and footer, then one
//! interlanguage link per other language is appended. Each link re-resolves
//! the title under that language, so `[[fr:Braise]]` rather than a copy of the
//! English title:
//!
//! ```text
//! __NOTOC__
//! {{Hero|name=Ember|...}}
//! [[fr:Braise]]
//! ```
//!
//! A page template that cannot be rendered (missing field, unknown type,
//! unknown base object) is skipped with a logged error; the run goes on.

use serde_json::{Map, Value};

use crate::attributes;
use crate::config::{CheckedPageTemplate, ElementsTemplates, PageKind, PagesTemplates};
use crate::display::{DisplayContext, prepare_display_data};
use crate::entities::{Entity, EntityKind, EntitySet};
use crate::language::Language;
use crate::templating::TemplateExpander;

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GeneratedPage {
    /// Code of the language the page is written in
    pub language: String,
    pub title: String,
    pub content: String,
}

/// Renders page templates for one language at a time.
#[derive(Debug, Clone, Copy)]
pub struct PageAssembler<'a> {
    expander: TemplateExpander<'a>,
    pages: &'a PagesTemplates,
    languages: &'a [Language],
}

impl<'a> PageAssembler<'a> {
    /// Create an assembler. `languages` lists every known language; the ones
    /// other than the active language receive interlanguage links.
    pub fn new(elements: &'a ElementsTemplates, pages: &'a PagesTemplates, languages: &'a [Language]) -> Self {
        Self {
            expander: TemplateExpander::new(elements),
            pages,
            languages,
        }
    }

    /// Derive display data under `language`, then render every page template.
    pub fn process_all_templates(&self, entities: &mut EntitySet, language: &Language) -> Vec<GeneratedPage> {
        self.refresh_display(entities, language);

        let mut results = Vec::new();
        for (name, page) in self.pages.iter() {
            let checked = match page.check(name) {
                Ok(checked) => checked,
                Err(e) => {
                    tracing::error!("{}", e);
                    continue;
                }
            };

            let Some(kind) = EntityKind::from_selector(&checked.base.kind) else {
                tracing::error!(
                    "Unknown base object '{}' in {}, please check pages_templates.yml and run again",
                    checked.base.kind,
                    name
                );
                continue;
            };

            tracing::info!("Processing {} template", name);
            let bases = base_objects(&checked, entities.of_kind(kind));
            match checked.kind {
                PageKind::Single => results.extend(self.single_pages(&checked, &bases, language)),
                PageKind::FullList => results.push(self.full_list_page(&checked, &bases, language)),
                PageKind::Unknown => {}
            }
        }
        results
    }

    /// Recompute display data kind by kind; heroes come first so that pets
    /// see up-to-date hero data.
    fn refresh_display(&self, entities: &mut EntitySet, language: &Language) {
        for kind in EntityKind::ALL {
            entities.refresh_display(kind, |all| {
                let ctx = DisplayContext::new(self.expander, language, all.heroes());
                all.of_kind(kind).map(|entity| prepare_display_data(entity, &ctx)).collect()
            });
        }
    }

    fn single_pages(
        &self,
        page: &CheckedPageTemplate<'_>,
        bases: &[Value],
        language: &Language,
    ) -> Vec<GeneratedPage> {
        bases
            .iter()
            .map(|base| {
                let body = self.expander.process(page.template, base, language);
                self.finish_page(page, body, base, language)
            })
            .collect()
    }

    fn full_list_page(&self, page: &CheckedPageTemplate<'_>, bases: &[Value], language: &Language) -> GeneratedPage {
        let rows: Vec<String> =
            bases.iter().map(|base| self.expander.process(page.template, base, language)).collect();

        // Title, header and footer resolve against the last row's base object
        let empty = Value::Object(Map::new());
        let base = bases.last().unwrap_or(&empty);
        self.finish_page(page, rows.join("\n"), base, language)
    }

    fn finish_page(
        &self,
        page: &CheckedPageTemplate<'_>,
        body: String,
        base: &Value,
        language: &Language,
    ) -> GeneratedPage {
        let title = self.title(page.title, base, language);

        let mut parts = Vec::with_capacity(3 + self.languages.len());
        if let Some(header) = page.header {
            parts.push(self.expander.process(header, base, language));
        }
        parts.push(body);
        if let Some(footer) = page.footer {
            parts.push(self.expander.process(footer, base, language));
        }
        for other in self.languages.iter().filter(|l| l.code != language.code) {
            parts.push(format!("[[{}:{}]]", other.code, self.title(page.title, base, other)));
        }

        GeneratedPage {
            language: language.code.clone(),
            title,
            content: parts.join("\n"),
        }
    }

    fn title(&self, title: &str, base: &Value, language: &Language) -> String {
        self.expander.resolve_values(title, base, language).text
    }
}

/// Base object of every entity, in entity order.
///
/// Entities whose sub-path does not resolve are left out with a warning.
fn base_objects<'e>(page: &CheckedPageTemplate<'_>, entities: impl Iterator<Item = &'e Entity>) -> Vec<Value> {
    entities
        .filter_map(|entity| {
            let tree = entity.tree();
            let Some(sub_path) = page.base.sub_path.as_deref() else {
                return Some(tree);
            };
            let base = attributes::get(&tree, sub_path).cloned();
            if base.is_none() {
                tracing::warn!(
                    "{} has no '{}', skipped by {}",
                    entity.name(),
                    sub_path,
                    page.name
                );
            }
            base
        })
        .collect()
}

/// Render every page template in each `rendered` language, sorted by
/// language code then title.
///
/// Interlanguage links point at every language of `linked`, which may be a
/// superset of `rendered`.
pub fn generate_pages(
    entities: &mut EntitySet,
    elements: &ElementsTemplates,
    pages: &PagesTemplates,
    rendered: &[Language],
    linked: &[Language],
) -> Vec<GeneratedPage> {
    let assembler = PageAssembler::new(elements, pages, linked);

    let mut results = Vec::new();
    for language in rendered {
        tracing::info!("Generating pages in {}", language.name);
        results.extend(assembler.process_all_templates(entities, language));
    }
    results.sort_by(|a, b| (&a.language, &a.title).cmp(&(&b.language, &b.title)));
    results
}
