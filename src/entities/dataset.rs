//! Dataset loading.
//!
//! ```yaml
//! heroes:
//!   - name: Ember
//!     heroclass: Mage
//!     stars: 3
//!     color: Red
//!     ascensions:
//!       - { level_max: 20, attack: 100, health: 200, gear: [Wand, "", Ring, Hat, Robe, ""] }
//!     talents: { base: [Fire Aura], ascend: [Burn], merge: [] }
//! pets:
//!   - { name: Cinder, petclass: Mage, color: Red, stars: 3, attack: 20, manacost: 5, signature: [Ember] }
//! maps:
//!   - { name: Spire_Fire_Temple, width: 5, height: 6, rooms: ["#####\n#1,2#"] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::heroclass::{STAR_TIERS, create_heroclasses};
use super::map::{GameMap, MapSource, sort_maps};
use super::talent::create_talents;
use super::{Entity, EntitySet, Hero, Pet};
use crate::core::WikigenError;

/// Signature heroes a pet may list.
const MAX_SIGNATURE_HEROES: usize = 2;

/// Raw dataset document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub maps: Vec<MapSource>,
}

impl Dataset {
    /// Load and validate a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
        let dataset = Self::from_yaml_str(&content, &path.display().to_string())?;
        tracing::info!(
            "Dataset loaded: {} heroes, {} pets, {} maps",
            dataset.heroes.len(),
            dataset.pets.len(),
            dataset.maps.len()
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset document. `source` names it in errors.
    ///
    /// Unknown classes and colours fail here, before any derivation runs.
    pub fn from_yaml_str(content: &str, source: &str) -> Result<Self, WikigenError> {
        let mut dataset: Self = serde_yaml::from_str(content).map_err(|e| WikigenError::ConfigParseError {
            file: source.to_string(),
            reason: e.to_string(),
        })?;
        dataset.validate()?;
        for hero in &mut dataset.heroes {
            hero.talents.normalize_names();
        }
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), WikigenError> {
        for (index, hero) in self.heroes.iter().enumerate() {
            if hero.name.trim().is_empty() {
                return Err(invalid(format!("hero #{}", index + 1), "missing name"));
            }
            if !(1..=STAR_TIERS).contains(&usize::from(hero.stars)) {
                return Err(invalid(
                    format!("hero {}", hero.name),
                    format!("stars must be between 1 and {STAR_TIERS}, got {}", hero.stars),
                ));
            }
        }

        for (index, pet) in self.pets.iter().enumerate() {
            if pet.name.trim().is_empty() {
                return Err(invalid(format!("pet #{}", index + 1), "missing name"));
            }
            if pet.signature.len() > MAX_SIGNATURE_HEROES {
                return Err(invalid(
                    format!("pet {}", pet.name),
                    format!("at most {MAX_SIGNATURE_HEROES} signature heroes, got {}", pet.signature.len()),
                ));
            }
        }

        for (index, map) in self.maps.iter().enumerate() {
            if map.name.trim().is_empty() {
                return Err(invalid(format!("map #{}", index + 1), "missing name"));
            }
        }

        Ok(())
    }

    /// Build every entity, including the aggregated class tables and talents.
    pub fn into_entities(self) -> EntitySet {
        let heroclasses = create_heroclasses(&self.heroes);
        let talents = create_talents(&self.heroes);
        let mut maps: Vec<GameMap> = self.maps.into_iter().map(GameMap::from).collect();
        sort_maps(&mut maps);

        let entities = self
            .heroes
            .into_iter()
            .map(Entity::Hero)
            .chain(self.pets.into_iter().map(Entity::Pet))
            .chain(heroclasses.into_iter().map(Entity::Heroclass))
            .chain(talents.into_iter().map(Entity::Talent))
            .chain(maps.into_iter().map(Entity::Map))
            .collect();

        EntitySet::new(entities)
    }
}

fn invalid(entity: String, reason: impl Into<String>) -> WikigenError {
    WikigenError::InvalidDataset {
        entity,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityKind;

    const DATASET: &str = r##"
heroes:
  - name: Ember
    heroclass: Mage
    stars: 3
    color: Red
    ascensions:
      - { level_max: 20, attack: 100, health: 200, gear: [Wand, "", Ring, Hat, Robe, ""] }
    talents: { base: [Blessing Of Fire], ascend: [Burn], merge: [] }
  - name: Frost
    heroclass: Warrior
    stars: 4
    color: Blue
pets:
  - { name: Cinder, petclass: Mage, color: Red, stars: 3, attack: 20, manacost: 5, signature: [Ember] }
maps:
  - { name: Spire_Fire_Temple, width: 5, height: 6, rooms: ["#1"] }
"##;

    #[test]
    fn test_load_builds_every_kind() {
        let dataset = Dataset::from_yaml_str(DATASET, "dataset.yml").unwrap();
        assert_eq!(dataset.heroes[0].talents.base, vec!["Blessing of Fire"]);

        let set = dataset.into_entities();
        assert_eq!(set.count(EntityKind::Hero), 2);
        assert_eq!(set.count(EntityKind::Pet), 1);
        assert_eq!(set.count(EntityKind::Heroclass), 5);
        assert_eq!(set.count(EntityKind::Talent), 2);
        assert_eq!(set.count(EntityKind::Map), 1);
    }

    /// Room layouts keep their `#` markers intact
    #[test]
    fn test_map_rooms_keep_hash_markers() {
        let dataset = Dataset::from_yaml_str(DATASET, "dataset.yml").unwrap();
        assert_eq!(dataset.maps[0].rooms, vec!["#1"]);

        let shared = crate::test_utils::fixtures::dataset();
        assert_eq!(shared.heroes.len(), 3);
        assert_eq!(shared.maps[0].rooms, vec!["#1#\n,~,"]);
    }

    #[test]
    fn test_unknown_class_fails_loading() {
        let content = "heroes:\n  - { name: Ghost, heroclass: Necromancer, stars: 3, color: Dark }\n";
        let err = Dataset::from_yaml_str(content, "dataset.yml").unwrap_err();
        assert!(matches!(err, WikigenError::ConfigParseError { .. }));
    }

    #[test]
    fn test_star_range_is_checked() {
        let content = "heroes:\n  - { name: Nova, heroclass: Mage, stars: 7, color: Light }\n";
        let err = Dataset::from_yaml_str(content, "dataset.yml").unwrap_err();
        match err {
            WikigenError::InvalidDataset {
                entity,
                ..
            } => assert_eq!(entity, "hero Nova"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_many_signature_heroes() {
        let content = "pets:\n  - { name: Cinder, petclass: Mage, color: Red, stars: 3, attack: 20, manacost: 5, signature: [A, B, C] }\n";
        assert!(matches!(
            Dataset::from_yaml_str(content, "dataset.yml"),
            Err(WikigenError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn test_empty_document_is_empty_dataset() {
        let dataset = Dataset::from_yaml_str("{}", "dataset.yml").unwrap();
        assert!(dataset.into_entities().is_empty());
    }
}
