use predicates::prelude::*;
use wikigen_cli::test_utils::ProjectFixture;

use crate::common::TestProject;

#[test]
fn test_validate_valid_project() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["validate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("languages: en, fr"));
    assert!(output.stdout.contains("✓ Project is valid"));
}

#[test]
fn test_validate_json_output() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["validate", "--format", "json"]).unwrap();
    output.assert_success();

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["page_templates"], 2);
    assert_eq!(report["languages"], serde_json::json!(["en", "fr"]));
    assert_eq!(report["errors"], serde_json::json!([]));
}

#[test]
fn test_validate_template_cycle_fails() {
    let fixture = ProjectFixture::default()
        .with_elements_templates("a:\n  x: '**b.y**'\nb:\n  y: '**a.x**'\n");
    let project = TestProject::with_fixture(fixture).unwrap();

    let output = project.run_wikigen(&["validate"]).unwrap();
    output.assert_failure();
    assert!(output.stdout.contains("✗ Template reference cycle detected"));
    assert!(output.stderr.contains("suggestion"));
}

/// Warnings only fail validation in strict mode
#[test]
fn test_validate_strict_mode() {
    let fixture = ProjectFixture::default().with_pages_templates(
        "Ghosts:\n  base object: ghost\n  type: single\n  title: x\n  template: '**Ghost.template**'\n",
    );
    let project = TestProject::with_fixture(fixture).unwrap();

    let output = project.run_wikigen(&["validate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("Unknown base object 'ghost' in Ghosts"));
    assert!(output.stdout.contains("Unknown element template"));

    project
        .command()
        .args(["validate", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation failed with 0 errors and 2 warnings"));
}

#[test]
fn test_validate_invalid_yaml() {
    let fixture = ProjectFixture::default().with_pages_templates("Hero pages: [unclosed\n");
    let project = TestProject::with_fixture(fixture).unwrap();

    project
        .command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pages_templates.yml"));
}
