//! `wikigen validate`: check a project without rendering anything.
//!
//! Checks, in order:
//! - every configured file loads;
//! - element templates reference each other without cycles (an error);
//! - every referenced element template exists (a warning);
//! - every page template has a base object, body, title and valid type, and
//!   its base object names a known entity kind (warnings);
//! - each language translates every hero name (warnings).

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use super::common::{ProjectContext, resolve_config_path};
use crate::config::validate_references;
use crate::core::WikigenError;
use crate::entities::EntityKind;

/// Output format of the validation report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable report
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Validate the project configuration and templates.
#[derive(Args, Debug, Default)]
pub struct ValidateCommand {
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResults {
    /// No error (and no warning in strict mode)
    pub valid: bool,
    pub element_templates: usize,
    pub page_templates: usize,
    pub languages: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidateCommand {
    /// Run the command against the project at `config`.
    pub async fn execute(self, config: Option<PathBuf>) -> Result<()> {
        let project = ProjectContext::load(&resolve_config_path(config))?;
        let (results, cycle) = check_project(&project);
        let valid = results.errors.is_empty() && (!self.strict || results.warnings.is_empty());
        let results = ValidationResults {
            valid,
            ..results
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text => print_text(&results),
        }

        if let Some(cycle) = cycle {
            return Err(cycle.into());
        }
        if !results.valid {
            return Err(anyhow::anyhow!(
                "Validation failed with {} errors and {} warnings",
                results.errors.len(),
                results.warnings.len()
            ));
        }
        Ok(())
    }
}

/// Run every check; the template cycle, if any, is returned separately.
pub fn check_project(project: &ProjectContext) -> (ValidationResults, Option<WikigenError>) {
    let mut results = ValidationResults {
        element_templates: project.elements.len(),
        page_templates: project.pages.len(),
        languages: project.languages.iter().map(|l| l.code.clone()).collect(),
        ..Default::default()
    };

    let mut cycle = None;
    match validate_references(&project.elements, &project.pages) {
        Ok(dangling) => {
            results.warnings.extend(dangling.iter().map(|d| format!("Unknown element template {d}")));
        }
        Err(e) => {
            results.errors.push(e.to_string());
            cycle = Some(e);
        }
    }

    for (name, page) in project.pages.iter() {
        match page.check(name) {
            Ok(checked) if EntityKind::from_selector(&checked.base.kind).is_none() => {
                results.warnings.push(format!("Unknown base object '{}' in {}", checked.base.kind, name));
            }
            Ok(_) => {}
            Err(e) => results.warnings.push(e.to_string()),
        }
    }

    for language in &project.languages {
        let missing: Vec<&str> = project
            .dataset
            .heroes
            .iter()
            .map(|h| h.name.as_str())
            .filter(|name| !language.has_translation(name))
            .collect();
        if !missing.is_empty() {
            results.warnings.push(format!(
                "language_{} has no translation for {}",
                language.code,
                missing.join(", ")
            ));
        }
    }

    results.valid = results.errors.is_empty();
    (results, cycle)
}

fn print_text(results: &ValidationResults) {
    println!(
        "Checked {} element templates, {} page templates, languages: {}",
        results.element_templates,
        results.page_templates,
        results.languages.join(", ")
    );
    for error in &results.errors {
        println!("{} {}", "✗".red(), error);
    }
    for warning in &results.warnings {
        println!("{} {}", "⚠".yellow(), warning);
    }
    if results.valid {
        println!("{} Project is valid", "✓".green());
    }
}
