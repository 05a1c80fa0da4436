//! Closed enumerations shared by heroes, pets and class tables.
//!
//! Unknown class or colour names are rejected when the dataset is
//! deserialized, so derivation code can match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hero and pet class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeroClass {
    Archer,
    Assassin,
    Barbarian,
    Bard,
    Druid,
    Elementalist,
    Gladiator,
    Guardian,
    Healer,
    Hunter,
    Javelineer,
    Knight,
    Mage,
    Monk,
    Paladin,
    Pirate,
    Princess,
    Ranger,
    Rogue,
    Warlock,
    Warrior,
    Witch,
}

/// How a class reaches its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackType {
    Melee,
    Ranged,
    Magic,
}

/// Shape of a class's attack area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPattern {
    Cross,
    Star,
}

impl HeroClass {
    /// Class name as written in the dataset and translation files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Archer => "Archer",
            Self::Assassin => "Assassin",
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Druid => "Druid",
            Self::Elementalist => "Elementalist",
            Self::Gladiator => "Gladiator",
            Self::Guardian => "Guardian",
            Self::Healer => "Healer",
            Self::Hunter => "Hunter",
            Self::Javelineer => "Javelineer",
            Self::Knight => "Knight",
            Self::Mage => "Mage",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Pirate => "Pirate",
            Self::Princess => "Princess",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Warlock => "Warlock",
            Self::Warrior => "Warrior",
            Self::Witch => "Witch",
        }
    }

    /// Melee, ranged or magic.
    pub fn attack_type(self) -> AttackType {
        match self {
            Self::Assassin
            | Self::Druid
            | Self::Gladiator
            | Self::Guardian
            | Self::Knight
            | Self::Warrior
            | Self::Paladin
            | Self::Pirate
            | Self::Princess
            | Self::Barbarian
            | Self::Monk
            | Self::Rogue => AttackType::Melee,
            Self::Javelineer | Self::Archer | Self::Hunter | Self::Ranger | Self::Bard => {
                AttackType::Ranged
            }
            Self::Healer | Self::Witch | Self::Warlock | Self::Mage | Self::Elementalist => {
                AttackType::Magic
            }
        }
    }

    /// Cross or star attack area.
    pub fn attack_pattern(self) -> AttackPattern {
        match self {
            Self::Princess
            | Self::Barbarian
            | Self::Monk
            | Self::Rogue
            | Self::Ranger
            | Self::Bard
            | Self::Elementalist => AttackPattern::Star,
            Self::Assassin
            | Self::Druid
            | Self::Gladiator
            | Self::Guardian
            | Self::Knight
            | Self::Warrior
            | Self::Paladin
            | Self::Pirate
            | Self::Javelineer
            | Self::Archer
            | Self::Hunter
            | Self::Healer
            | Self::Witch
            | Self::Warlock
            | Self::Mage => AttackPattern::Cross,
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AttackType {
    /// English label, used as a translation key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Melee => "Melee",
            Self::Ranged => "Ranged",
            Self::Magic => "Magic",
        }
    }
}

impl AttackPattern {
    /// English label, used as a translation key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cross => "Cross",
            Self::Star => "Star",
        }
    }
}

/// Hero and pet colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Dark,
    Green,
    Light,
    Red,
}

impl Color {
    /// Every colour, in class table order.
    pub const ALL: [Color; 5] = [Color::Blue, Color::Dark, Color::Green, Color::Light, Color::Red];

    /// Colour name as written in the dataset and translation files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Dark => "Dark",
            Self::Green => "Green",
            Self::Light => "Light",
            Self::Red => "Red",
        }
    }

    /// Background colour of this colour's rows in class tables.
    pub fn background_hex(self) -> &'static str {
        match self {
            Self::Blue => "#d0e7f9",
            Self::Dark => "#e6d5f7",
            Self::Green => "#d4edda",
            Self::Light => "#fff3cd",
            Self::Red => "#f8d7da",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
