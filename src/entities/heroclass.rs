//! Hero counts by colour, class and star tier.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use super::hero::Hero;
use super::taxonomy::{Color, HeroClass};
use crate::attributes::DisplayTree;

/// Number of star tiers in a class table.
pub const STAR_TIERS: usize = 5;

/// Class table of one colour.
///
/// `table[0]` counts every hero of the colour, `table[n]` the `n`-star heroes.
/// Every row has one column per class plus a trailing totals column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heroclass {
    pub name: Color,
    pub color_hex: String,
    pub classes: Vec<HeroClass>,
    pub table: Vec<Vec<u32>>,
    /// Counts across every colour, same layout as a table row
    pub totals: Vec<u32>,
    #[serde(skip)]
    pub display: DisplayTree,
}

impl Heroclass {
    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        super::tree_with_display(self, &self.display)
    }
}

/// Build one class table per colour from the hero roster.
///
/// Heroes whose star count falls outside `1..=5` are only counted in the
/// total row. An empty roster yields no table.
pub fn create_heroclasses(heroes: &[Hero]) -> Vec<Heroclass> {
    if heroes.is_empty() {
        return Vec::new();
    }

    let classes: Vec<HeroClass> =
        heroes.iter().map(|h| h.heroclass).collect::<BTreeSet<_>>().into_iter().collect();
    let width = classes.len() + 1;

    let mut tables: Vec<(Color, Vec<Vec<u32>>)> = Vec::with_capacity(Color::ALL.len());
    let mut totals = vec![0u32; width];

    for color in Color::ALL {
        let mut table = vec![vec![0u32; width]; STAR_TIERS + 1];
        for hero in heroes.iter().filter(|h| h.color == color) {
            let Some(column) = classes.iter().position(|c| *c == hero.heroclass) else {
                continue;
            };
            table[0][column] += 1;
            let star_row = usize::from(hero.stars);
            if (1..=STAR_TIERS).contains(&star_row) {
                table[star_row][column] += 1;
            }
        }

        for row in &mut table {
            row[width - 1] = row[..width - 1].iter().sum();
        }
        for (total, count) in totals.iter_mut().zip(&table[0]) {
            *total += count;
        }
        tables.push((color, table));
    }

    tables
        .into_iter()
        .map(|(color, table)| Heroclass {
            name: color,
            color_hex: color.background_hex().to_string(),
            classes: classes.clone(),
            table,
            totals: totals.clone(),
            display: DisplayTree::new(),
        })
        .collect()
}
