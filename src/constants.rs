//! Global constants used throughout the wikigen codebase.
//!
//! This module contains the numeric game rules used by display derivation,
//! the wiki markup fragments shared by several entity kinds, and the limits
//! applied by the template expander. Defining them centrally keeps the
//! derivation formulas readable and makes magic numbers discoverable.

/// Gear bonus granted per equipped slot, in percent of the base stat.
pub const GEAR_BONUS_PERCENT_PER_SLOT: u64 = 5;

/// Merge (mastery) bonus, in percent of the base stat.
pub const MERGE_BONUS_PERCENT: u64 = 15;

/// Mana cost every pet starts from before talents and merges are applied.
pub const PET_BASE_MANACOST: i64 = 25;

/// Maximum nesting depth for `**Name.Kind**` element expansion.
///
/// Element templates may reference other element templates. Expansion stops
/// at this depth, leaving the remaining macro text in place.
pub const MAX_EXPANSION_DEPTH: usize = 10;

/// Maximum allowed Levenshtein distance as a percentage of the name length
/// when suggesting element template names.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Wiki line break used to join "with text" lists.
pub const LINE_BREAK: &str = "<br />";

/// Wiki line break followed by an indentation, used for bullet-style lists.
pub const BULLET_BREAK: &str = "<br />&nbsp;&nbsp;";

/// Separator between wiki table cells on the same row.
pub const TABLE_CELL_SEPARATOR: &str = "||";

/// Star glyph repeated once per star.
pub const STAR_GLYPH: &str = "&#11088; ";

/// Background colour of the totals row in hero class tables.
pub const TOTALS_ROW_HEX: &str = "#d3d3d3";

/// Default project configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "wikigen.toml";

/// File extension of pages written by the file publisher.
pub const PAGE_FILE_EXTENSION: &str = "wiki";
