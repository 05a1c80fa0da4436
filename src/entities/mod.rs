//! Game entities rendered into wiki pages.
//!
//! Five kinds of entities exist. Heroes, pets and maps come from the dataset
//! file; class tables and talents are aggregated from the hero roster when the
//! dataset is loaded.
//!
//! | Kind        | Selector    | Source                                  |
//! |-------------|-------------|-----------------------------------------|
//! | [`Hero`]    | `hero`      | dataset `heroes`                        |
//! | [`Pet`]     | `pet`       | dataset `pets`                          |
//! | [`Heroclass`] | `heroclass` | [`create_heroclasses`] over the heroes |
//! | [`Talent`]  | `talent`    | [`create_talents`] over the heroes      |
//! | [`GameMap`] | `map`       | dataset `maps`, via [`GameMap::from_layout`] |
//!
//! Every entity exposes its raw fields and its `display` data as one tree
//! ([`Entity::tree`]) that templates address with dotted paths.

mod dataset;
mod hero;
mod heroclass;
mod map;
mod pet;
mod talent;
mod taxonomy;

pub use dataset::Dataset;
pub use hero::{Ascension, Hero, HeroTalents, Leader, Leaders};
pub use heroclass::{Heroclass, STAR_TIERS, create_heroclasses};
pub use map::{Cell, GameMap, MAP_NAME_PREFIX, MapImage, MapSource, sort_maps};
pub use pet::{Pet, PetTalents};
pub use talent::{Talent, TalentHolder, create_talents};
pub use taxonomy::{AttackPattern, AttackType, Color, HeroClass};

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::attributes::DisplayTree;

/// Entity kind, as named by the `base object` of page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Hero,
    Pet,
    Heroclass,
    Talent,
    Map,
}

impl EntityKind {
    /// Every kind, in derivation order. Heroes come first since pet
    /// derivation reads hero display data.
    pub const ALL: [EntityKind; 5] =
        [EntityKind::Hero, EntityKind::Pet, EntityKind::Heroclass, EntityKind::Talent, EntityKind::Map];

    /// Lowercase selector name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Pet => "pet",
            Self::Heroclass => "heroclass",
            Self::Talent => "talent",
            Self::Map => "map",
        }
    }

    /// Parse a selector name.
    pub fn from_selector(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any renderable entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Hero(Hero),
    Pet(Pet),
    Heroclass(Heroclass),
    Talent(Talent),
    Map(GameMap),
}

impl Entity {
    /// The kind of this entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Hero(_) => EntityKind::Hero,
            Self::Pet(_) => EntityKind::Pet,
            Self::Heroclass(_) => EntityKind::Heroclass,
            Self::Talent(_) => EntityKind::Talent,
            Self::Map(_) => EntityKind::Map,
        }
    }

    /// Display name, used in log messages.
    pub fn name(&self) -> String {
        match self {
            Self::Hero(hero) => hero.name.clone(),
            Self::Pet(pet) => pet.name.clone(),
            Self::Heroclass(heroclass) => heroclass.name.to_string(),
            Self::Talent(talent) => talent.name.clone(),
            Self::Map(map) => map.name.clone(),
        }
    }

    /// Derived display data.
    pub fn display(&self) -> &DisplayTree {
        match self {
            Self::Hero(hero) => &hero.display,
            Self::Pet(pet) => &pet.display,
            Self::Heroclass(heroclass) => &heroclass.display,
            Self::Talent(talent) => &talent.display,
            Self::Map(map) => &map.display,
        }
    }

    /// Replace the display data.
    pub fn set_display(&mut self, display: DisplayTree) {
        let slot = match self {
            Self::Hero(hero) => &mut hero.display,
            Self::Pet(pet) => &mut pet.display,
            Self::Heroclass(heroclass) => &mut heroclass.display,
            Self::Talent(talent) => &mut talent.display,
            Self::Map(map) => &mut map.display,
        };
        *slot = display;
    }

    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        match self {
            Self::Hero(hero) => hero.tree(),
            Self::Pet(pet) => pet.tree(),
            Self::Heroclass(heroclass) => heroclass.tree(),
            Self::Talent(talent) => talent.tree(),
            Self::Map(map) => map.tree(),
        }
    }
}

/// Every entity of a run, grouped by kind in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Wrap a list of entities.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
        }
    }

    /// Entities of one kind, in load order.
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind() == kind)
    }

    /// Number of entities of one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.of_kind(kind).count()
    }

    /// The hero roster.
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Hero(hero) => Some(hero),
            _ => None,
        })
    }

    /// Recompute the display data of every entity of `kind`.
    ///
    /// `derive` runs once per pass over the whole set, so it may read the
    /// display data of kinds refreshed earlier. It returns one tree per
    /// entity of `kind`, in [`EntitySet::of_kind`] order.
    pub fn refresh_display<F>(&mut self, kind: EntityKind, derive: F)
    where
        F: FnOnce(&EntitySet) -> Vec<DisplayTree>,
    {
        let displays = derive(self);
        let expected = self.count(kind);
        if displays.len() != expected {
            tracing::error!("Expected {} display trees for {}, got {}", expected, kind, displays.len());
        }

        let targets = self.entities.iter_mut().filter(|e| e.kind() == kind);
        for (entity, display) in targets.zip(displays) {
            entity.set_display(display);
        }
    }

    /// Total number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the set holds no entity.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Serialize `raw` and attach `display` under the `display` key.
fn tree_with_display<T: Serialize>(raw: &T, display: &DisplayTree) -> Value {
    let mut tree = match serde_json::to_value(raw) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(_) => Value::Object(serde_json::Map::new()),
        Err(e) => {
            tracing::error!("Cannot build entity tree: {}", e);
            Value::Object(serde_json::Map::new())
        }
    };
    crate::attributes::set(&mut tree, "display", display.as_value().clone());
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::hero;

    #[test]
    fn test_kind_selectors_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_selector(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_selector("dragon"), None);
    }

    #[test]
    fn test_refresh_display_only_touches_one_kind() {
        let mut set = EntitySet::new(vec![
            Entity::Hero(hero("Ember", HeroClass::Mage, Color::Red, 3)),
            Entity::Map(GameMap::from_layout("Spire_Crypt", 1, 1, &["#".to_string()])),
        ]);

        set.refresh_display(EntityKind::Hero, |all| {
            all.of_kind(EntityKind::Hero)
                .map(|entity| {
                    let mut display = DisplayTree::new();
                    display.set("label", format!("{} of {}", entity.name(), all.count(EntityKind::Hero)));
                    display
                })
                .collect()
        });

        let hero = set.of_kind(EntityKind::Hero).next().unwrap();
        assert_eq!(hero.display().get_str("label"), Some("Ember of 1"));
        let map = set.of_kind(EntityKind::Map).next().unwrap();
        assert_eq!(map.display(), &DisplayTree::new());
        assert_eq!(map.tree()["display"], serde_json::json!({}));
    }
}
