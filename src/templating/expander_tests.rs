//! Tests for macro expansion.

use serde_json::json;
use std::collections::HashMap;

use crate::config::ElementsTemplates;
use crate::language::Language;
use crate::templating::{MacroIssue, TemplateExpander, strip_line_breaks};

const ELEMENTS: &str = r#"
color:
  template: "{{Color|//color//}}"
  translated_template: "{{Color|//value//|//translated.value//}}\n"
trait:
  template: "{{Trait|//value//}}<br />"
hero:
  infobox: "{{Hero|**color.template**|**stars.line**}}"
stars:
  line: "**stars.glyphs**"
  glyphs: "//stars//"
loop:
  template: "again **loop.template**"
"#;

fn elements() -> ElementsTemplates {
    ElementsTemplates::from_yaml_str(ELEMENTS).unwrap()
}

fn french() -> Language {
    let translations = HashMap::from([
        ("Red".to_string(), "Rouge".to_string()),
        ("Totals".to_string(), "Totaux".to_string()),
        ("Ember".to_string(), "Braise".to_string()),
    ]);
    Language::new("fr", "Français", translations)
}

fn english() -> Language {
    Language::new("en", "English", HashMap::new())
}

#[test]
fn test_value_reference_resolves_nested_path() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "display": { "attack": { "A0": { "total_base_gear_merge": 125 } } } });

    let text = expander.process("Attack: //display.attack.A0.total_base_gear_merge//", &hero, &english());
    assert_eq!(text, "Attack: 125");
}

#[test]
fn test_missing_value_is_left_verbatim() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "name": "Ember" });

    let expansion = expander.expand("//name// //display.missing//", &hero, &english());
    assert_eq!(expansion.text, "Ember //display.missing//");
    assert_eq!(
        expansion.issues,
        vec![MacroIssue::UnresolvedValue {
            path: "display.missing".to_string()
        }]
    );
}

#[test]
fn test_unknown_element_does_not_stop_other_macros() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "name": "Ember", "color": "Red" });

    let expansion =
        expander.expand("**Ghost.template** //name// **color.template**", &hero, &english());
    assert_eq!(expansion.text, "**Ghost.template** Ember {{Color|Red}}");
    assert_eq!(expansion.issues.len(), 1);
    assert!(matches!(
        &expansion.issues[0],
        MacroIssue::UnknownElement { name, .. } if name == "Ghost"
    ));
}

#[test]
fn test_unknown_element_suggests_close_names() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);

    let expansion = expander.expand("**colr.template**", &json!({}), &english());
    match &expansion.issues[..] {
        [MacroIssue::UnknownElement {
            suggestions,
            ..
        }] => assert_eq!(suggestions, &vec!["color".to_string()]),
        other => panic!("unexpected issues: {other:?}"),
    }
}

#[test]
fn test_unknown_kind_is_reported() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);

    let expansion = expander.expand("**color.no_text_template**", &json!({}), &english());
    assert_eq!(expansion.text, "**color.no_text_template**");
    assert_eq!(
        expansion.issues,
        vec![MacroIssue::UnknownKind {
            name: "color".to_string(),
            kind: "no_text_template".to_string()
        }]
    );
}

#[test]
fn test_malformed_reference_is_left_verbatim() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);

    let expansion = expander.expand("**bold** text", &json!({}), &english());
    assert_eq!(expansion.text, "**bold** text");
    assert!(matches!(expansion.issues[..], [MacroIssue::MalformedReference { .. }]));
}

#[test]
fn test_nested_elements_share_the_base_object() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "color": "Red", "stars": 5 });

    let text = expander.process("**hero.infobox**", &hero, &english());
    assert_eq!(text, "{{Hero|{{Color|Red}}|5}}");
}

#[test]
fn test_reference_cycle_stops_at_depth_limit() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);

    let expansion = expander.expand("**loop.template**", &json!({}), &english());
    assert!(expansion.text.ends_with("**loop.template**"));
    assert_eq!(expansion.text.matches("again").count(), crate::constants::MAX_EXPANSION_DEPTH);
    assert!(matches!(expansion.issues[..], [MacroIssue::DepthExceeded { depth: 10, .. }]));
}

#[test]
fn test_translated_value_and_literal() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "name": "Ember" });

    let text = expander.process("//translated.name// - //translated.'Totals'//", &hero, &french());
    assert_eq!(text, "Braise - Totaux");
}

#[test]
fn test_translated_empty_value_is_unresolved() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "species": "" });

    let expansion = expander.expand("//translated.species//", &hero, &french());
    assert_eq!(expansion.text, "//translated.species//");
    assert_eq!(expansion.issues.len(), 1);
}

#[test]
fn test_raw_empty_value_renders_empty() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "display": { "gear": { "A4": { "raw_list": "" } } } });

    let expansion = expander.expand("[//display.gear.A4.raw_list//]", &hero, &english());
    assert_eq!(expansion.text, "[]");
    assert!(expansion.is_clean());
}

#[test]
fn test_transform_scalar_base_and_strip_line_breaks() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);

    let text = expander.transform(&json!("Red"), "color.translated_template", &french());
    assert_eq!(text, "{{Color|Red|Rouge}}");

    let text = expander.transform(&json!("Fire Resistance"), "trait.template", &french());
    assert_eq!(text, "{{Trait|Fire Resistance}}");
}

#[test]
fn test_transform_missing_key_is_empty() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    assert_eq!(expander.transform(&json!("Red"), "color.missing", &english()), "");
    assert_eq!(expander.transform(&json!("Red"), "nodot", &english()), "");
}

#[test]
fn test_expansion_is_idempotent_once_expanded() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let hero = json!({ "color": "Red", "stars": 5 });

    let once = expander.process("**hero.infobox** //color//", &hero, &english());
    let twice = expander.process(&once, &hero, &english());
    assert_eq!(once, twice);
}

#[test]
fn test_list_values_are_comma_joined() {
    let elements = elements();
    let expander = TemplateExpander::new(&elements);
    let pet = json!({ "signature": ["Ember", "Frost"] });

    assert_eq!(expander.process("//signature//", &pet, &english()), "Ember, Frost");
}

#[test]
fn test_strip_line_breaks() {
    assert_eq!(strip_line_breaks("  a\n<br />b<br>c \n"), "abc");
}
