//! Pets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::taxonomy::{Color, HeroClass};
use crate::attributes::DisplayTree;

/// Pet talent progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTalents {
    /// Attack percent granted by base talents
    #[serde(default)]
    pub base: u64,
    /// Number of silver talents (2 % each)
    #[serde(default)]
    pub silver: u64,
    /// Gold talent name
    #[serde(default)]
    pub gold: String,
    /// Icon forced on the gold talent template
    #[serde(default)]
    pub gold_pic: Option<String>,
    /// Talent unlocked at full merge
    #[serde(default)]
    pub full: Option<String>,
    /// Merge talent names
    #[serde(default)]
    pub merge: Vec<String>,
}

impl PetTalents {
    /// Merge talents whose name contains `needle`.
    pub fn merge_count(&self, needle: &str) -> u64 {
        self.merge.iter().filter(|t| t.contains(needle)).count() as u64
    }
}

/// A pet as loaded from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    /// Portrait name when it differs from the pet name
    #[serde(default)]
    pub special_art_id: Option<String>,
    pub petclass: HeroClass,
    pub color: Color,
    pub stars: u8,
    /// Attack cap, in percent
    pub attack: u64,
    /// Health cap, in percent
    #[serde(default)]
    pub health: u64,
    /// Mana cost at full merge
    pub manacost: u64,
    /// Signature hero, then optional alternate signature hero
    #[serde(default)]
    pub signature: Vec<String>,
    #[serde(default)]
    pub talents: PetTalents,
    #[serde(skip)]
    pub display: DisplayTree,
}

impl Pet {
    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        super::tree_with_display(self, &self.display)
    }

    /// The signature hero name.
    pub fn signature_hero(&self) -> Option<&str> {
        self.signature.first().map(String::as_str)
    }

    /// The alternate signature hero name.
    pub fn alternate_signature_hero(&self) -> Option<&str> {
        self.signature.get(1).map(String::as_str)
    }
}
