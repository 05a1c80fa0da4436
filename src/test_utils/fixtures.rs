//! Test fixtures for creating sample projects and entities
//!
//! The YAML constants form one small but complete project: three heroes, one
//! pet, one map, element and page templates, and two languages. [`ProjectFixture`]
//! writes them to disk with a matching `wikigen.toml`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ElementsTemplates, PagesTemplates};
use crate::entities::{Ascension, Color, Dataset, Hero, HeroClass, HeroTalents, Leaders};
use crate::language::Language;

/// Element templates covering every key used by display derivation.
pub const ELEMENTS_TEMPLATES: &str = r#"
trait:
  template: "{{Trait|//value//}}"
  translated_template: "{{Trait|//value//|//translated.value//}}"
  translated_linked_template: "{{Trait|//value//|//translated.value//|Link=1}}"
  no_text_template: "{{Trait|//value//|NoText=1}}"
color:
  template: "{{Color|//value//|//translated.value//}}"
  no_text_template: "{{Color|//value//|NoText=1}}"
  no_text_small_template: "{{Color|//value//|NoText=1|Small=1}}"
species:
  template: "{{Species|//value//|//translated.value//}}"
  no_text_template: "{{Species|//value//|NoText=1}}"
category:
  talent_template: "[[Category://value//]]"
heroclass:
  no_text_template: "{{Class|//value//|NoText=1}}"
stars:
  template_1: "{{Stars|1}}"
  template_2: "{{Stars|2}}"
  template_3: "{{Stars|3}}"
  template_4: "{{Stars|4}}"
  template_5: "{{Stars|5}}"
portrait:
  translated_small_size_template: "{{Portrait|//name//|//translated.name//|Small=1}}"
hero:
  infobox: "{{Hero|name=//translated.name//|color=**hero.color**|attack=//display.attack.max.total//}}"
  color: "//translated.color//"
"#;

/// Page templates: one page per hero and one list of every hero.
pub const PAGES_TEMPLATES: &str = r#"
Hero pages:
  base object: hero
  type: single
  title: "//translated.name//"
  header: "__NOTOC__"
  template: "**hero.infobox**"
Heroes list:
  base object: hero
  type: full list
  title: "//translated.'Heroes'//"
  header: "{| class=\"wikitable\""
  template: "|-\n|//translated.name//||//display.stars//"
  footer: "|}"
"#;

/// English language file.
pub const LANGUAGE_EN: &str = r#"
Name: English
Code: en
Translations:
  Heroes:
    Ember: Ember
    Frost: Frost
    Ivy: Ivy
  Colors:
    Red: Red
    Blue: Blue
    Green: Green
  General:
    Heroes: Heroes
    and: and
    for: for
    or: or
"#;

/// French language file.
pub const LANGUAGE_FR: &str = r#"
Name: Français
Code: fr
Translations:
  Heroes:
    Ember: Braise
    Frost: Givre
    Ivy: Lierre
  Colors:
    Red: Rouge
    Blue: Bleu
    Green: Vert
  General:
    Heroes: Héros
    and: et
    for: pour
    or: ou
"#;

/// Three heroes, one pet and one map.
pub const DATASET: &str = r##"
heroes:
  - name: Ember
    heroclass: Mage
    stars: 3
    color: Red
    species: Human
    ascensions:
      - { level_max: 20, attack: 100, health: 200, gear: [Wand, Orb, "", Hat, "", ""] }
      - { level_max: 30, attack: 150, health: 300, gear: [Wand, Orb, Ring, Hat, Robe, Boots] }
    talents: { base: [Fire Aura], ascend: [Burn], merge: [Mana Shield] }
    leaders:
      a: { attack: 1.5, color: Red }
  - name: Frost
    heroclass: Warrior
    stars: 4
    color: Blue
    species: Elf
    ascensions:
      - { level_max: 20, attack: 80, health: 400, gear: [Axe, "", "", Helm, Plate, ""] }
    talents: { base: [Ice Armor], ascend: [], merge: [] }
  - name: Ivy
    heroclass: Druid
    stars: 5
    color: Green
    species: Elf
    ascensions:
      - { level_max: 20, attack: 90, health: 250, gear: ["", "", "", "", "", ""] }
    talents: { base: [Regrowth], ascend: [], merge: [] }
pets:
  - name: Cinder
    petclass: Mage
    color: Red
    stars: 3
    attack: 20
    manacost: 5
    signature: [Ember]
    talents: { base: 4, silver: 3, gold: Fire Burst, merge: [Attack Boost, Mana Efficiency] }
maps:
  - name: Spire_Fire_Temple
    width: 3
    height: 2
    rooms: ["#1#\n,~,"]
    images:
      - { filename: Spire_Fire_Temple }
"##;

/// Build a minimal hero.
pub fn hero(name: &str, heroclass: HeroClass, color: Color, stars: u8) -> Hero {
    Hero {
        name: name.to_string(),
        playsome_name: None,
        heroclass,
        stars,
        color,
        species: String::new(),
        ai: String::new(),
        ai_speed: String::new(),
        exclusivity: String::new(),
        ascensions: Vec::new(),
        talents: HeroTalents::default(),
        leaders: Leaders::default(),
        display: Default::default(),
    }
}

/// Build an ascension tier.
pub fn ascension(attack: u64, health: u64, gear: &[&str]) -> Ascension {
    Ascension {
        level_max: None,
        attack: Some(attack),
        health: Some(health),
        gear: gear.iter().map(|g| (*g).to_string()).collect(),
    }
}

/// Parsed [`ELEMENTS_TEMPLATES`].
pub fn elements_templates() -> ElementsTemplates {
    ElementsTemplates::from_yaml_str(ELEMENTS_TEMPLATES).expect("fixture element templates parse")
}

/// Parsed [`PAGES_TEMPLATES`].
pub fn pages_templates() -> PagesTemplates {
    PagesTemplates::from_yaml_str(PAGES_TEMPLATES).expect("fixture page templates parse")
}

/// Parsed [`DATASET`].
pub fn dataset() -> Dataset {
    Dataset::from_yaml_str(DATASET, "dataset.yml").expect("fixture dataset parses")
}

/// Parsed [`LANGUAGE_EN`].
pub fn english() -> Language {
    Language::from_yaml_str(LANGUAGE_EN, "language_en.yml").expect("fixture language parses")
}

/// Parsed [`LANGUAGE_FR`].
pub fn french() -> Language {
    Language::from_yaml_str(LANGUAGE_FR, "language_fr.yml").expect("fixture language parses")
}

/// A complete project written to disk.
#[derive(Clone, Debug)]
pub struct ProjectFixture {
    pub elements_templates: String,
    pub pages_templates: String,
    pub dataset: String,
    pub languages: Vec<(String, String)>,
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self {
            elements_templates: ELEMENTS_TEMPLATES.to_string(),
            pages_templates: PAGES_TEMPLATES.to_string(),
            dataset: DATASET.to_string(),
            languages: vec![
                ("en".to_string(), LANGUAGE_EN.to_string()),
                ("fr".to_string(), LANGUAGE_FR.to_string()),
            ],
        }
    }
}

impl ProjectFixture {
    /// Replace the element templates.
    pub fn with_elements_templates(mut self, content: &str) -> Self {
        self.elements_templates = content.to_string();
        self
    }

    /// Replace the page templates.
    pub fn with_pages_templates(mut self, content: &str) -> Self {
        self.pages_templates = content.to_string();
        self
    }

    /// Write every file under `dir`, returning the path of `wikigen.toml`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        for sub in ["data", "templates", "languages"] {
            fs::create_dir_all(dir.join(sub))
                .with_context(|| format!("Failed to create {}", dir.join(sub).display()))?;
        }

        fs::write(dir.join("data/dataset.yml"), &self.dataset)?;
        fs::write(dir.join("templates/elements_templates.yml"), &self.elements_templates)?;
        fs::write(dir.join("templates/pages_templates.yml"), &self.pages_templates)?;

        let mut language_paths = Vec::new();
        for (code, content) in &self.languages {
            let relative = format!("languages/language_{code}.yml");
            fs::write(dir.join(&relative), content)?;
            language_paths.push(format!("\"{relative}\""));
        }

        let config = format!(
            r#"[paths]
dataset = "data/dataset.yml"
elements_templates = "templates/elements_templates.yml"
pages_templates = "templates/pages_templates.yml"
languages = [{}]
output = "output"
"#,
            language_paths.join(", ")
        );
        let config_path = dir.join(crate::constants::DEFAULT_CONFIG_FILE);
        fs::write(&config_path, config)?;
        Ok(config_path)
    }
}
