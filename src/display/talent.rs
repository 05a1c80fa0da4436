//! Talent display data.

use crate::attributes::DisplayTree;
use crate::entities::{Talent, TalentHolder};

/// `[[Ember]] (x2 : base 1, merge 2)`
fn holder_entry(holder: &TalentHolder) -> String {
    let count = if holder.position.len() > 1 { format!("x{} : ", holder.position.len()) } else { String::new() };
    format!("[[{}]] ({count}{})", holder.name, holder.position.join(", "))
}

pub(super) fn derive(talent: &Talent) -> DisplayTree {
    let mut display = DisplayTree::new();
    let heroes: Vec<String> = talent.heroes.iter().map(holder_entry).collect();
    display.set("heroes_list", heroes.join(", "));
    display
}
