//! wikigen - multilingual wiki page generator for game data
//!
//! wikigen turns game entities (heroes, pets, class tables, talents, maps) into
//! wiki markup. Each entity gets a tree of presentation-ready values, element
//! and page templates are expanded against it, and one page per template and
//! language is written out with links to its translations.
//!
//! # Architecture Overview
//!
//! ```text
//! dataset.yml ─► entities ─► display ─► templating ─► pages ─► publish
//!                              ▲            ▲           ▲
//!                         language    elements_templates  pages_templates
//! ```
//!
//! 1. [`entities`] loads the dataset and builds the aggregated kinds (class
//!    tables, talents).
//! 2. [`display`] derives each entity's `display` tree under one language.
//! 3. [`templating`] expands `**Name.Kind**` element references and
//!    `//path//` value references, resolved through [`attributes`].
//! 4. [`pages`] renders page templates in `single` or `full list` mode and
//!    appends interlanguage links.
//! 5. [`publish`] writes the pages, skipping unchanged ones.
//!
//! # Core Modules
//!
//! - [`attributes`] - Dotted-path get/set over value trees
//! - [`cli`] - Command-line interface (`generate`, `validate`, `list`)
//! - [`config`] - Project configuration, template files, reference validation
//! - [`constants`] - Formatting constants shared across modules
//! - [`core`] - Error types and user-facing error reporting
//! - [`language`] - Translation tables
//!
//! # Template Syntax
//!
//! ```yaml
//! # elements_templates.yml
//! trait:
//!   template: "{{Trait|//value//}}"
//! hero:
//!   infobox: "{{Hero|name=//translated.name//|talents=//display.talents.base.raw_list//}}"
//!
//! # pages_templates.yml
//! Hero pages:
//!   base object: hero
//!   type: single
//!   title: "//translated.name//"
//!   template: "**hero.infobox**"
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! wikigen validate
//! wikigen generate --language en --language fr
//! wikigen list
//! ```

pub mod attributes;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod language;

// Rendering pipeline
pub mod display;
pub mod entities;
pub mod pages;
pub mod publish;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
