//! Talents and the heroes that carry them.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::hero::Hero;
use crate::attributes::DisplayTree;

/// One hero carrying a talent, with every slot it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentHolder {
    pub name: String,
    /// Slot labels such as `base 2`, `ascend 1`, `merge 3`
    pub position: Vec<String>,
}

/// A talent with its cross-reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Talent {
    pub name: String,
    pub heroes: Vec<TalentHolder>,
    #[serde(skip)]
    pub display: DisplayTree,
}

impl Talent {
    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        super::tree_with_display(self, &self.display)
    }
}

/// Collect every distinct talent of the roster, sorted by name.
pub fn create_talents(heroes: &[Hero]) -> Vec<Talent> {
    let mut talents: BTreeMap<String, Vec<TalentHolder>> = BTreeMap::new();

    for hero in heroes {
        for (talent, position) in hero_talent_positions(hero) {
            talents.entry(talent).or_default().push(TalentHolder {
                name: hero.name.clone(),
                position,
            });
        }
    }

    talents
        .into_iter()
        .map(|(name, heroes)| Talent {
            name,
            heroes,
            display: DisplayTree::new(),
        })
        .collect()
}

fn hero_talent_positions(hero: &Hero) -> BTreeMap<String, Vec<String>> {
    let groups = [
        ("base", &hero.talents.base),
        ("ascend", &hero.talents.ascend),
        ("merge", &hero.talents.merge),
    ];

    let mut positions: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (group, names) in groups {
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            positions.entry(name.clone()).or_default().push(format!("{group} {}", index + 1));
        }
    }
    positions
}
