//! Display data derivation.
//!
//! Every entity carries a `display` tree of presentation-ready values
//! (formatted stat tables, talent lists, leader sentences, wiki table rows)
//! computed from its raw fields. [`prepare_display_data`] rebuilds that tree
//! from scratch for one entity under one language; it never reads the
//! previous tree.
//!
//! Derivation expands element templates for talent, colour and species
//! names, so it needs the element templates and the active language. Both
//! travel in a [`DisplayContext`] together with the hero roster that pets
//! cross-reference.

mod hero;
mod heroclass;
mod map;
mod pet;
mod talent;


use serde_json::Value;
use std::cell::OnceCell;
use std::collections::HashMap;

use crate::attributes::DisplayTree;
use crate::constants::{BULLET_BREAK, LINE_BREAK};
use crate::entities::{Entity, Hero};
use crate::language::Language;
use crate::templating::TemplateExpander;

/// Read-only collaborators of one derivation pass.
///
/// One context serves every entity of a kind. Hero trees are serialized on
/// first use and reused for the rest of the pass.
#[derive(Debug, Clone)]
pub struct DisplayContext<'a> {
    pub expander: TemplateExpander<'a>,
    pub language: &'a Language,
    pub heroes: Vec<&'a Hero>,
    hero_trees: OnceCell<HashMap<&'a str, Value>>,
}

impl<'a> DisplayContext<'a> {
    /// Create a context.
    pub fn new(
        expander: TemplateExpander<'a>,
        language: &'a Language,
        heroes: impl IntoIterator<Item = &'a Hero>,
    ) -> Self {
        Self {
            expander,
            language,
            heroes: heroes.into_iter().collect(),
            hero_trees: OnceCell::new(),
        }
    }

    /// Expand element template `key` with a bare word as base object.
    pub fn element(&self, word: &str, key: &str) -> String {
        self.expander.transform(&Value::String(word.to_string()), key, self.language)
    }

    /// Expand element template `key` against a whole tree.
    pub fn element_for(&self, base: &Value, key: &str) -> String {
        self.expander.transform(base, key, self.language)
    }

    /// Translate a word in the active language.
    pub fn translate(&self, word: &str) -> String {
        self.language.translate(word)
    }

    /// Look a hero up by name.
    pub fn find_hero(&self, name: &str) -> Option<&'a Hero> {
        self.heroes.iter().copied().find(|h| h.name == name)
    }

    /// The tree of a hero of the roster, built once per context.
    pub fn hero_tree(&self, name: &str) -> Option<&Value> {
        self.hero_trees
            .get_or_init(|| self.heroes.iter().copied().map(|h| (h.name.as_str(), h.tree())).collect())
            .get(name)
    }
}

/// Recompute the display data of one entity.
pub fn prepare_display_data(entity: &Entity, ctx: &DisplayContext<'_>) -> DisplayTree {
    tracing::debug!("Calculate display data for {} {}", entity.kind(), entity.name());
    match entity {
        Entity::Hero(h) => hero::derive(h, ctx),
        Entity::Pet(p) => pet::derive(p, ctx),
        Entity::Heroclass(c) => heroclass::derive(c, ctx),
        Entity::Talent(t) => talent::derive(t),
        Entity::Map(m) => map::derive(m),
    }
}

/// `a<br />b<br />c`
fn line_list(items: &[String]) -> String {
    items.join(LINE_BREAK)
}

/// `<br />&nbsp;&nbsp;a<br />&nbsp;&nbsp;b`, empty for no item
fn bullet_list(items: &[String]) -> String {
    items.iter().map(|item| format!("{BULLET_BREAK}{item}")).collect()
}
