//! Class table display data: wiki table header, body rows and totals row.

use super::DisplayContext;
use crate::attributes::DisplayTree;
use crate::constants::{TABLE_CELL_SEPARATOR, TOTALS_ROW_HEX};
use crate::entities::Heroclass;

fn cells(counts: &[u32]) -> String {
    counts.iter().map(|count| format!("{TABLE_CELL_SEPARATOR}{count}")).collect()
}

pub(super) fn derive(heroclass: &Heroclass, ctx: &DisplayContext<'_>) -> DisplayTree {
    let mut display = DisplayTree::new();
    let color = heroclass.name.as_str();

    let header: Vec<String> =
        heroclass.classes.iter().map(|c| ctx.element(c.as_str(), "heroclass.no_text_template")).collect();
    display.set("header", header.join("!!"));

    let mut table = format!("|-\n|- style=\"background-color: {}\"\n", heroclass.color_hex);
    for (stars, row) in heroclass.table.iter().enumerate() {
        if stars == 0 {
            table.push_str(&format!("|{}", ctx.element(color, "color.no_text_template")));
        } else {
            table.push_str(&format!(
                "|{} {}",
                ctx.element(color, "color.no_text_small_template"),
                ctx.element(color, &format!("stars.template_{stars}"))
            ));
        }
        table.push_str(&cells(row));
        table.push_str("\n|-\n");
    }
    display.set("table_output", table);

    display.set(
        "footer",
        format!(
            "|- style=\"background-color: {TOTALS_ROW_HEX}\"\n|{}{}",
            ctx.translate("Totals"),
            cells(&heroclass.totals)
        ),
    );

    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Color, HeroClass, create_heroclasses};
    use crate::templating::TemplateExpander;
    use crate::test_utils::fixtures::{elements_templates, english, hero};

    #[test]
    fn test_red_table_markup() {
        let heroes = vec![
            hero("Ember", HeroClass::Mage, Color::Red, 3),
            hero("Frost", HeroClass::Warrior, Color::Blue, 1),
        ];
        let tables = create_heroclasses(&heroes);
        let red = tables.iter().find(|t| t.name == Color::Red).unwrap();

        let elements = elements_templates();
        let language = english();
        let ctx = DisplayContext::new(TemplateExpander::new(&elements), &language, &heroes);
        let display = derive(red, &ctx);

        assert_eq!(
            display.get_str("header"),
            Some("{{Class|Mage|NoText=1}}!!{{Class|Warrior|NoText=1}}")
        );

        let table = display.get_str("table_output").unwrap();
        assert!(table.starts_with("|-\n|- style=\"background-color: #f8d7da\"\n"));
        assert!(table.contains("|{{Color|Red|NoText=1}}||1||0||1\n|-\n"));
        assert!(table.contains("|{{Color|Red|NoText=1|Small=1}} {{Stars|3}}||1||0||1\n|-\n"));
        assert!(table.contains("|{{Color|Red|NoText=1|Small=1}} {{Stars|1}}||0||0||0\n|-\n"));

        assert_eq!(
            display.get_str("footer"),
            Some("|- style=\"background-color: #d3d3d3\"\n|Totals||1||1||2")
        );
    }
}
