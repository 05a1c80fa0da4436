//! Configuration management for wikigen.
//!
//! A project is described by one TOML file and a handful of YAML documents:
//!
//! 1. **Project configuration** (`wikigen.toml`) - locations of every other file
//! 2. **Element templates** (`elements_templates.yml`) - reusable markup snippets
//!    addressed by `**Name.Kind**` macros
//! 3. **Page templates** (`pages_templates.yml`) - which pages to build, from
//!    which entity kind, in single or full list mode
//! 4. **Languages** (`language_<code>.yml`) - see [`crate::language`]
//!
//! # Modules
//!
//! - `parser` - generic TOML and YAML parsing with file context on errors
//! - `project` - `wikigen.toml` and path resolution
//! - `templates` - element and page template definitions
//! - `reference_graph` - cycle detection over element template references
//!
//! # Validation
//!
//! Template files load leniently: an incomplete page template is only
//! rejected when pages are assembled, and a macro naming an unknown template
//! is left verbatim in the output. The one hard failure is a reference cycle
//! between element templates, detected by [`validate_references`] before any
//! page is generated.

mod parser;
mod project;
mod reference_graph;
mod templates;

pub use parser::{parse_config, parse_yaml};
pub use project::{PathsConfig, ProjectConfig};
pub use reference_graph::{DanglingReference, ReferenceGraph, TemplateRef, validate_references};
pub use templates::{
    BaseObjectSelector, CheckedPageTemplate, ElementsTemplates, PageKind, PageTemplate,
    PageTemplateError, PagesTemplates,
};
