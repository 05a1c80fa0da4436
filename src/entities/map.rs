//! Spire maps.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::attributes::DisplayTree;

/// Marker preceding the map name in game asset names.
pub const MAP_NAME_PREFIX: &str = "Spire";

/// Number of room layouts kept per map.
pub const MAX_ROOMS: usize = 3;

/// One grid cell of a room layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Wall,
    Rubble,
    Water,
    EmptyTile,
    Tile,
    /// Hero spawn point, numbered 1 to 6
    Spawn(u8),
}

impl Cell {
    /// Decode one layout character.
    pub fn from_layout_char(c: char) -> Self {
        match c {
            '#' => Self::Wall,
            '^' => Self::Rubble,
            '~' => Self::Water,
            ',' => Self::EmptyTile,
            '1'..='6' => Self::Spawn(c as u8 - b'0'),
            _ => Self::Tile,
        }
    }
}

/// Rendered image of a map, as published on the wiki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImage {
    /// File name without the `.png` extension
    pub filename: String,
    #[serde(default)]
    pub variant: Option<String>,
}

/// Map entry of the dataset: the raw asset name and room layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSource {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// One layout text per room, rows separated by newlines
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub images: Vec<MapImage>,
}

/// A parsed map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMap {
    pub name: String,
    pub playsome_name: String,
    pub width: u32,
    pub height: u32,
    pub has_water_or_lava: bool,
    /// Every room layout is identical
    pub always_same_start: bool,
    pub rooms: Vec<Vec<Vec<Cell>>>,
    pub images: Vec<MapImage>,
    #[serde(skip)]
    pub display: DisplayTree,
}

impl GameMap {
    /// Parse a map from its asset name and room layouts.
    ///
    /// `Spire_Fire_Temple` becomes `Fire Temple`. Only the first
    /// [`MAX_ROOMS`] layouts are kept.
    pub fn from_layout(raw_name: &str, width: u32, height: u32, layouts: &[String]) -> Self {
        let short = raw_name.split_once(MAP_NAME_PREFIX).map_or(raw_name, |(_, rest)| rest);
        let short = short.strip_prefix('_').unwrap_or(short);
        let name = short.replace('_', " ").trim().to_string();

        let rooms: Vec<Vec<Vec<Cell>>> = layouts
            .iter()
            .take(MAX_ROOMS)
            .map(|layout| {
                layout.split('\n').map(|line| line.chars().map(Cell::from_layout_char).collect()).collect()
            })
            .collect();

        let has_water_or_lava = rooms.iter().flatten().flatten().any(|c| *c == Cell::Water);
        let always_same_start = rooms.iter().skip(1).all(|room| Some(room) == rooms.first());

        Self {
            name,
            playsome_name: format!("{MAP_NAME_PREFIX}_{short}"),
            width,
            height,
            has_water_or_lava,
            always_same_start,
            rooms,
            images: Vec::new(),
            display: DisplayTree::new(),
        }
    }

    /// Raw fields plus `display` as one tree.
    pub fn tree(&self) -> Value {
        super::tree_with_display(self, &self.display)
    }
}

impl From<MapSource> for GameMap {
    fn from(source: MapSource) -> Self {
        let mut map = Self::from_layout(&source.name, source.width, source.height, &source.rooms);
        map.images = source.images;
        map
    }
}

/// Order maps with a fixed start first, then by height, water, and name.
pub fn sort_maps(maps: &mut [GameMap]) {
    maps.sort_by(compare_maps);
}

fn compare_maps(a: &GameMap, b: &GameMap) -> Ordering {
    (!a.always_same_start, a.height, a.has_water_or_lava, &a.name).cmp(&(
        !b.always_same_start,
        b.height,
        b.has_water_or_lava,
        &b.name,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layout_parses_cells() {
        let map = GameMap::from_layout("Spire_Fire_Temple", 3, 2, &["#^~\n,1x".to_string()]);
        assert_eq!(map.name, "Fire Temple");
        assert_eq!(map.playsome_name, "Spire_Fire_Temple");
        assert_eq!(
            map.rooms[0],
            vec![
                vec![Cell::Wall, Cell::Rubble, Cell::Water],
                vec![Cell::EmptyTile, Cell::Spawn(1), Cell::Tile],
            ]
        );
        assert!(map.has_water_or_lava);
        assert!(map.always_same_start);
    }

    #[test]
    fn test_at_most_three_rooms_and_start_detection() {
        let layouts: Vec<String> = ["#1", "#2", "#1", "#3"].map(String::from).to_vec();
        let map = GameMap::from_layout("SpireCrypt", 2, 1, &layouts);
        assert_eq!(map.name, "Crypt");
        assert_eq!(map.rooms.len(), MAX_ROOMS);
        assert!(!map.always_same_start);
        assert!(!map.has_water_or_lava);
    }

    #[test]
    fn test_sort_maps() {
        let mut maps = vec![
            GameMap::from_layout("Spire_B", 5, 6, &["#1".to_string(), "#2".to_string()]),
            GameMap::from_layout("Spire_C", 5, 6, &["~1".to_string()]),
            GameMap::from_layout("Spire_A", 5, 6, &["#1".to_string()]),
            GameMap::from_layout("Spire_D", 5, 4, &["#1".to_string()]),
        ];
        sort_maps(&mut maps);
        let names: Vec<&str> = maps.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_cells_serialize_snake_case() {
        assert_eq!(serde_json::to_value(Cell::EmptyTile).unwrap(), serde_json::json!("empty_tile"));
    }
}
