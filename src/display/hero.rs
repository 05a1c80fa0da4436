//! Hero display data.
//!
//! Stat keys are written per ascension tier `An`:
//!
//! ```text
//! attack.A0.base / gear / merge / total_base_gear / total_base_gear_merge
//! attack.A1_gain            percent gain over the previous tier with data
//! attack.max.base / gear / merge / total    values of the last tier with data
//! ```
//!
//! The first tier without a base value ends the tier sequence: it and every
//! later tier get empty strings, never zeros.

use std::collections::BTreeSet;

use super::{DisplayContext, bullet_list, line_list};
use crate::attributes::DisplayTree;
use crate::constants::{
    GEAR_BONUS_PERCENT_PER_SLOT, LINE_BREAK, MERGE_BONUS_PERCENT, STAR_GLYPH, TABLE_CELL_SEPARATOR,
};
use crate::entities::{Ascension, Hero, Leader};

const STAT_FIELDS: [&str; 5] = ["base", "gear", "merge", "total_base_gear", "total_base_gear_merge"];

/// Which stat of a tier is being derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stat {
    Attack,
    Health,
}

impl Stat {
    fn key(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Health => "health",
        }
    }

    fn base(self, tier: &Ascension) -> Option<u64> {
        match self {
            Self::Attack => tier.attack,
            Self::Health => tier.health,
        }
    }

    fn gear_slots(self, tier: &Ascension) -> &[String] {
        match self {
            Self::Attack => tier.attack_gear(),
            Self::Health => tier.health_gear(),
        }
    }
}

/// Bonuses of one tier for one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TierStats {
    pub base: u64,
    pub gear: u64,
    pub merge: u64,
}

impl TierStats {
    /// `ceil(base * 5% * slots)` and `ceil(base * 15%)`.
    pub fn compute(base: u64, equipped_slots: u64) -> Self {
        Self {
            base,
            gear: (base * GEAR_BONUS_PERCENT_PER_SLOT * equipped_slots).div_ceil(100),
            merge: (base * MERGE_BONUS_PERCENT).div_ceil(100),
        }
    }

    pub fn total_base_gear(&self) -> u64 {
        self.base + self.gear
    }

    pub fn total_base_gear_merge(&self) -> u64 {
        self.base + self.gear + self.merge
    }
}

/// `(current - previous) / previous * 100` with one decimal, `0%` when
/// `previous` is zero.
pub(crate) fn gain(current: u64, previous: u64) -> String {
    if previous == 0 {
        return "0%".to_string();
    }
    let percent = (current as f64 - previous as f64) / previous as f64 * 100.0;
    format!("{percent:.1}%")
}

pub(super) fn derive(hero: &Hero, ctx: &DisplayContext<'_>) -> DisplayTree {
    let mut display = DisplayTree::new();

    display.set("attack_type", hero.heroclass.attack_type().as_str());
    display.set("attack_pattern", hero.heroclass.attack_pattern().as_str());
    display.set("image", format!("{}_Portrait.png", hero.name.replace(" '", "_'")));

    for stat in [Stat::Attack, Stat::Health] {
        derive_stat(&mut display, hero, stat);
    }
    match hero.ascensions.iter().filter_map(|t| t.level_max).max() {
        Some(level) => display.set("max_level", level),
        None => display.set_empty("max_level"),
    }

    derive_talents(&mut display, hero, ctx);
    derive_gear(&mut display, hero, ctx);
    display.set("stars", STAR_GLYPH.repeat(usize::from(hero.stars)));
    derive_leaders(&mut display, hero, ctx);
    derive_talent_categories(&mut display, hero, ctx);

    display
}

fn derive_stat(display: &mut DisplayTree, hero: &Hero, stat: Stat) {
    let key = stat.key();
    let mut previous_total: Option<u64> = None;
    let mut last: Option<TierStats> = None;

    let mut ended = false;

    for (index, tier) in hero.ascensions.iter().enumerate() {
        let prefix = format!("{key}.A{index}");
        // The first tier without a base value ends the sequence
        let base = if ended { None } else { stat.base(tier) };
        let Some(base) = base else {
            ended = true;
            for field in STAT_FIELDS {
                display.set_empty(&format!("{prefix}.{field}"));
            }
            continue;
        };

        let equipped = stat.gear_slots(tier).iter().filter(|g| !g.is_empty()).count() as u64;
        let stats = TierStats::compute(base, equipped);
        display.set(&format!("{prefix}.base"), stats.base);
        display.set(&format!("{prefix}.gear"), stats.gear);
        display.set(&format!("{prefix}.merge"), stats.merge);
        display.set(&format!("{prefix}.total_base_gear"), stats.total_base_gear());
        display.set(&format!("{prefix}.total_base_gear_merge"), stats.total_base_gear_merge());

        let total = stats.total_base_gear_merge();
        if let Some(previous) = previous_total {
            display.set(&format!("{prefix}_gain"), gain(total, previous));
        }
        previous_total = Some(total);
        last = Some(stats);
    }

    match last {
        Some(stats) => {
            display.set(&format!("{key}.max.base"), stats.base);
            display.set(&format!("{key}.max.gear"), stats.gear);
            display.set(&format!("{key}.max.merge"), stats.merge);
            display.set(&format!("{key}.max.total"), stats.total_base_gear_merge());
        }
        None => {
            for field in ["base", "gear", "merge", "total"] {
                display.set_empty(&format!("{key}.max.{field}"));
            }
        }
    }
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn derive_talents(display: &mut DisplayTree, hero: &Hero, ctx: &DisplayContext<'_>) {
    let talents = &hero.talents;
    let with_text = |name: &str| ctx.element(name, "trait.translated_template");
    let no_text = |name: &str| ctx.element(name, "trait.no_text_template");

    let ascend: Vec<(usize, &str)> = talents
        .ascend
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(index, name)| (index + 1, name.as_str()))
        .collect();

    let groups: [(&str, Vec<String>, Vec<String>); 3] = [
        (
            "base",
            talents.base.iter().map(|t| with_text(t)).collect(),
            talents.base.iter().map(|t| no_text(t)).collect(),
        ),
        (
            "ascend",
            ascend
                .iter()
                .map(|(slot, name)| format!("{}<sup>{}</sup>", with_text(name), ordinal(*slot)))
                .collect(),
            ascend.iter().map(|(_, name)| no_text(name)).collect(),
        ),
        (
            "merge",
            talents.merge.iter().map(|t| with_text(t)).collect(),
            talents.merge.iter().map(|t| no_text(t)).collect(),
        ),
    ];

    for (group, with_text_items, no_text_items) in groups {
        display.set(&format!("talents.{group}.raw_list"), line_list(&with_text_items));
        display.set(&format!("talents.{group}.bullet_list"), bullet_list(&with_text_items));
        display.set(&format!("talents.{group}.raw_list_no_text"), no_text_items.concat());
    }

    // One entry per ascension slot, including tiers without a talent
    let slots = talents.ascend.len().max(hero.ascensions.len().saturating_sub(1));
    for slot in 1..=slots {
        let name = talents.ascend.get(slot - 1).map(String::as_str).unwrap_or_default();
        if name.is_empty() {
            display.set_empty(&format!("talents.A{slot}.raw_list"));
            display.set_empty(&format!("talents.A{slot}.with_link"));
        } else {
            display.set(&format!("talents.A{slot}.raw_list"), with_text(name));
            display.set(
                &format!("talents.A{slot}.with_link"),
                ctx.element(name, "trait.translated_linked_template"),
            );
        }
    }

    display.set("talents.base.raw_list_picless", line_list(&talents.base));
    display.set("talents.merge.raw_list_picless", line_list(&talents.merge));
}

fn derive_gear(display: &mut DisplayTree, hero: &Hero, ctx: &DisplayContext<'_>) {
    for (index, tier) in hero.ascensions.iter().enumerate() {
        let positional: Vec<String> = tier
            .gear
            .iter()
            .map(|g| if g.is_empty() { String::new() } else { ctx.translate(g) })
            .collect();
        let equipped: Vec<String> = positional.iter().filter(|g| !g.is_empty()).cloned().collect();

        let raw_list: String = equipped.iter().map(|g| format!("{LINE_BREAK}{g}")).collect();
        display.set(&format!("gear.A{index}.raw_list"), raw_list);
        display.set(&format!("gear.A{index}.bullet_list"), bullet_list(&equipped));
        display.set(&format!("gear.A{index}.table_list"), positional.join(TABLE_CELL_SEPARATOR));
    }

    let amulet = hero
        .ascensions
        .get(2)
        .and_then(|tier| tier.gear.first())
        .filter(|g| !g.is_empty())
        .map(|g| ctx.translate(g))
        .unwrap_or_default();
    display.set("gear.A3.amulet", amulet);
}

fn derive_leaders(display: &mut DisplayTree, hero: &Hero, ctx: &DisplayContext<'_>) {
    for (slot, leader) in [("leadA", &hero.leaders.a), ("leadB", &hero.leaders.b)] {
        display.set(&format!("{slot}.no_text"), format_leader_bonus(leader, "no_text_template", ctx));

        let with_text = format_leader_bonus(leader, "template", ctx);
        let with_text =
            if with_text.is_empty() { with_text } else { format!("{with_text} {}", ctx.translate("Heroes")) };
        display.set(&format!("{slot}.with_text"), with_text);
    }
}

/// Compose a leader bonus sentence such as
/// `x1.50 att and x1.20 def for {{Color|Red}}`.
pub(crate) fn format_leader_bonus(leader: &Leader, template_kind: &str, ctx: &DisplayContext<'_>) -> String {
    let mut lead = match (leader.attack, leader.defense) {
        (Some(attack), Some(defense)) => {
            format!("x{attack:.2} att {} x{defense:.2} def", ctx.translate("and"))
        }
        (Some(attack), None) => format!("x{attack:.2} att"),
        (None, Some(defense)) => format!("x{defense:.2} def"),
        (None, None) => match leader.talent.as_deref().filter(|t| !t.is_empty()) {
            Some(talent) => ctx.element(talent, &format!("trait.{template_kind}")),
            None => String::new(),
        },
    };
    if lead.is_empty() {
        return lead;
    }

    let mut target = String::new();
    if let Some(color) = leader.color.as_deref().filter(|c| !c.is_empty()) {
        target.push_str(&ctx.element(color, &format!("color.{template_kind}")));
    }
    if let Some(species) = leader.species.as_deref().filter(|s| !s.is_empty()) {
        target.push_str(&ctx.element(species, &format!("species.{template_kind}")));
    }
    if !target.is_empty() {
        lead.push_str(&format!(" {} {target}", ctx.translate("for")));
    }

    if let Some(extra) = leader.extra.as_deref().filter(|e| !e.is_empty()) {
        lead.push_str(&format!(
            " {} {}",
            ctx.translate("or"),
            ctx.element(extra, &format!("trait.{template_kind}"))
        ));
    }
    lead
}

fn derive_talent_categories(display: &mut DisplayTree, hero: &Hero, ctx: &DisplayContext<'_>) {
    let unique: BTreeSet<&str> = hero.talents.all().collect();
    let categories: String = unique.into_iter().map(|t| ctx.element(t, "category.talent_template")).collect();
    display.set("talent_categories", categories);
}
