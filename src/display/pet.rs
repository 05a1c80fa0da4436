//! Pet display data.

use super::DisplayContext;
use crate::attributes::DisplayTree;
use crate::constants::{BULLET_BREAK, LINE_BREAK, PET_BASE_MANACOST, STAR_GLYPH};
use crate::entities::{Hero, Pet};

const PORTRAIT_TEMPLATE: &str = "portrait.translated_small_size_template";
const PORTRAIT_SEPARATOR: &str = "<br />&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

pub(super) fn derive(pet: &Pet, ctx: &DisplayContext<'_>) -> DisplayTree {
    let mut display = DisplayTree::new();

    let portrait = pet.special_art_id.as_deref().filter(|id| !id.is_empty()).unwrap_or(&pet.name);
    display.set("image", format!("{portrait}_Portrait.png"));

    derive_signature(&mut display, pet, ctx);
    derive_talents(&mut display, pet, ctx);
    display.set("stars", STAR_GLYPH.repeat(usize::from(pet.stars)));
    display.set("stats_details", stats_details(pet, ctx));
    display.set("manacost_details", manacost_details(pet, ctx));

    display
}

fn portrait(hero: Option<&Hero>, ctx: &DisplayContext<'_>) -> String {
    hero.and_then(|h| ctx.hero_tree(&h.name))
        .map(|tree| ctx.element_for(tree, PORTRAIT_TEMPLATE))
        .unwrap_or_default()
}

fn derive_signature(display: &mut DisplayTree, pet: &Pet, ctx: &DisplayContext<'_>) {
    let signature = pet.signature_hero().unwrap_or_default();
    let signature_template = portrait(ctx.find_hero(signature), ctx);
    display.set("signature", signature);
    display.set("signature_translated", if signature.is_empty() { String::new() } else { ctx.translate(signature) });
    display.set("signature_template", &signature_template);

    let mut single_list = signature_template.clone();
    let mut with_title = format!("'''{} :''' {signature_template}", ctx.translate("Signature Hero"));

    let alternate = pet.alternate_signature_hero().map(|name| (name, ctx.find_hero(name)));
    match alternate {
        Some((name, hero)) => {
            let template = portrait(hero, ctx);
            display.set("signature_bis", name);
            display.set("signature_bis_translated", ctx.translate(name));
            display.set("signature_bis_template", &template);
            single_list.push_str(&format!(" {} {template}", ctx.translate("and")));
            with_title.push_str(&format!(
                "{LINE_BREAK}\n'''{} :''' {template}",
                ctx.translate("Alternate Signature Hero")
            ));
        }
        None => {
            display.set_empty("signature_bis");
            display.set_empty("signature_bis_translated");
            display.set_empty("signature_bis_template");
        }
    }
    display.set("signature_heroes_single_list", single_list);
    display.set("signature_heroes_with_title", with_title);

    let mut matching: Vec<&Hero> = ctx
        .heroes
        .iter()
        .copied()
        .filter(|h| h.color == pet.color && h.heroclass == pet.petclass)
        .collect();
    if let Some((_, Some(hero))) = alternate {
        matching.push(hero);
    }
    matching.sort_by(|a, b| a.name.cmp(&b.name));
    matching.dedup_by(|a, b| a.name == b.name);

    let portraits: Vec<String> = matching.into_iter().map(|h| portrait(Some(h), ctx)).collect();
    display.set("passive_matching_heroes", portraits.join(PORTRAIT_SEPARATOR));
}

/// Insert `|ForcePic=<pic>` before the first closing `}}` of a template.
fn force_pic(template: &str, pic: &str) -> String {
    match template.split_once("}}") {
        Some((head, tail)) => format!("{head}|ForcePic={pic}}}}}{tail}"),
        None => template.to_string(),
    }
}

fn derive_talents(display: &mut DisplayTree, pet: &Pet, ctx: &DisplayContext<'_>) {
    let talents = &pet.talents;

    let mut gold = ctx.element(&talents.gold, "trait.template");
    if let Some(pic) = talents.gold_pic.as_deref().filter(|p| !p.is_empty()) {
        gold = force_pic(&gold, pic);
    }
    display.set("gold_talent", gold);

    let full = match talents.full.as_deref().filter(|f| !f.is_empty()) {
        Some(full) => ctx.element(full, "trait.template"),
        None => String::new(),
    };
    display.set("full_talent", full);

    let merge: Vec<String> = talents.merge.iter().map(|m| ctx.element(m, "trait.template")).collect();
    let table_list: Vec<String> =
        merge.iter().enumerate().map(|(index, m)| format!("Merge{}={m}", index + 1)).collect();
    display.set("merge_talents.table_list", table_list.join("|"));
    display.set("merge_talents.row_list", merge.join(BULLET_BREAK));
}

/// Split of the attack cap between base value, talents and merge talents.
pub(crate) fn stats_details(pet: &Pet, ctx: &DisplayContext<'_>) -> String {
    let talents = pet.talents.base + pet.talents.silver * 2;
    let merge = pet.talents.merge_count("Attack");
    let base = pet.attack as i64 - talents as i64 - merge as i64;

    let mut details = format!(
        "({} {base}% + {} {talents}%",
        ctx.translate("Base"),
        ctx.translate("Talents")
    );
    if merge > 0 {
        details.push_str(&format!(" + {} {merge}%", ctx.translate("Merge")));
    }
    details.push(')');
    details
}

/// Mana cost at each merge stage, then mana merge bonuses.
pub(crate) fn manacost_details(pet: &Pet, ctx: &DisplayContext<'_>) -> String {
    let efficiency = pet.talents.merge_count("Efficiency") as i64;
    let active = PET_BASE_MANACOST - efficiency - pet.manacost as i64;

    let mut details = format!(
        "{BULLET_BREAK}{} : {PET_BASE_MANACOST}{BULLET_BREAK}{} : {active}{BULLET_BREAK}{} : {}{LINE_BREAK}\n",
        ctx.translate("Base"),
        ctx.translate("Active"),
        ctx.translate("Full merge"),
        pet.manacost
    );

    let capacity = pet.talents.merge_count("Capacity");
    if capacity > 0 {
        details.push_str(&format!(
            "'''{} :''' +{capacity} {}{LINE_BREAK}\n",
            ctx.translate("Mana Capacity"),
            ctx.translate("maximum Mana")
        ));
    }
    let reserves = pet.talents.merge_count("Reserves");
    if reserves > 0 {
        details.push_str(&format!(
            "'''{} :''' +{reserves} {}{LINE_BREAK}\n",
            ctx.translate("Mana Reserves"),
            ctx.translate("Mana in the beginning of battle")
        ));
    }
    details
}
