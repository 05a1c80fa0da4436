//! Heroes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::taxonomy::{Color, HeroClass};
use crate::attributes::DisplayTree;

/// Stats and gear of one ascension tier. Tier `An` is entry `n`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ascension {
    /// Level cap reached at this tier
    #[serde(default)]
    pub level_max: Option<u64>,
    /// Attack cap; absent when the hero never reaches this tier
    #[serde(default)]
    pub attack: Option<u64>,
    /// Health cap; absent when the hero never reaches this tier
    #[serde(default)]
    pub health: Option<u64>,
    /// Gear slots, attack slots first then health slots; empty string = no gear
    #[serde(default)]
    pub gear: Vec<String>,
}

impl Ascension {
    /// Gear slots boosting attack (first half).
    pub fn attack_gear(&self) -> &[String] {
        &self.gear[..self.gear_split()]
    }

    /// Gear slots boosting health (second half).
    pub fn health_gear(&self) -> &[String] {
        &self.gear[self.gear_split()..]
    }

    fn gear_split(&self) -> usize {
        self.gear.len().div_ceil(2)
    }
}

/// Talent names by slot group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroTalents {
    /// Talents available from the start
    #[serde(default)]
    pub base: Vec<String>,
    /// One talent per ascension, `ascend[0]` unlocked at A1
    #[serde(default)]
    pub ascend: Vec<String>,
    /// Mastery (merge) talents
    #[serde(default)]
    pub merge: Vec<String>,
}

impl HeroTalents {
    /// Every talent name, in slot order, skipping empty slots.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.base
            .iter()
            .chain(&self.ascend)
            .chain(&self.merge)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub(crate) fn normalize_names(&mut self) {
        for name in self.base.iter_mut().chain(self.ascend.iter_mut()).chain(self.merge.iter_mut()) {
            *name = name.replace(" Of ", " of ");
        }
    }
}

/// One leader bonus slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    /// Attack multiplier
    #[serde(default)]
    pub attack: Option<f64>,
    /// Defense multiplier
    #[serde(default)]
    pub defense: Option<f64>,
    /// Talent granted instead of a multiplier
    #[serde(default)]
    pub talent: Option<String>,
    /// Colour the bonus applies to
    #[serde(default)]
    pub color: Option<String>,
    /// Species the bonus applies to
    #[serde(default)]
    pub species: Option<String>,
    /// Alternative talent requirement
    #[serde(default)]
    pub extra: Option<String>,
}

/// The two leader bonus slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaders {
    #[serde(default)]
    pub a: Leader,
    #[serde(default)]
    pub b: Leader,
}

/// A hero as loaded from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    /// Name used by the game files, when it differs
    #[serde(default)]
    pub playsome_name: Option<String>,
    pub heroclass: HeroClass,
    pub stars: u8,
    pub color: Color,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub ai: String,
    #[serde(default)]
    pub ai_speed: String,
    /// Event the hero is exclusive to, if any
    #[serde(default)]
    pub exclusivity: String,
    #[serde(default)]
    pub ascensions: Vec<Ascension>,
    #[serde(default)]
    pub talents: HeroTalents,
    #[serde(default)]
    pub leaders: Leaders,
    #[serde(skip)]
    pub display: DisplayTree,
}

impl Hero {
    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        super::tree_with_display(self, &self.display)
    }
}
