use predicates::prelude::*;
use wikigen_cli::test_utils::ProjectFixture;

use crate::common::TestProject;

/// Every page template is rendered once per hero and language
#[test]
fn test_generate_writes_every_page() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["generate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("8 pages: 8 created, 0 updated, 0 unchanged"));

    for (language, file) in [
        ("en", "Ember.wiki"),
        ("en", "Frost.wiki"),
        ("en", "Ivy.wiki"),
        ("en", "Heroes.wiki"),
        ("fr", "Braise.wiki"),
        ("fr", "Givre.wiki"),
        ("fr", "Lierre.wiki"),
        ("fr", "Héros.wiki"),
    ] {
        assert!(project.page_path(language, file).exists(), "missing {language}/{file}");
    }

    assert_eq!(
        project.read_page("en", "Ember.wiki").unwrap(),
        "__NOTOC__\n{{Hero|name=Ember|color=Red|attack=196}}\n[[fr:Braise]]"
    );
    assert_eq!(
        project.read_page("fr", "Braise.wiki").unwrap(),
        "__NOTOC__\n{{Hero|name=Braise|color=Rouge|attack=196}}\n[[en:Ember]]"
    );
}

/// A second run leaves identical pages alone
#[test]
fn test_generate_twice_reports_unchanged() {
    let project = TestProject::new().unwrap();

    project.run_wikigen(&["generate"]).unwrap().assert_success();
    let output = project.run_wikigen(&["generate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("8 pages: 0 created, 0 updated, 8 unchanged"));
}

/// Edited pages are overwritten and reported as updated
#[test]
fn test_generate_updates_modified_page() {
    let project = TestProject::new().unwrap();

    project.run_wikigen(&["generate"]).unwrap().assert_success();
    std::fs::write(project.page_path("en", "Frost.wiki"), "stale").unwrap();

    let output = project.run_wikigen(&["generate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("8 pages: 0 created, 1 updated, 7 unchanged"));
    assert!(project.read_page("en", "Frost.wiki").unwrap().starts_with("__NOTOC__\n{{Hero|name=Frost"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 pages rendered (dry run, nothing written)"));

    assert!(!project.project_path().join("output").exists());
}

/// `--language` limits rendering but keeps links to every language
#[test]
fn test_generate_single_language() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["generate", "--language", "fr"]).unwrap();
    output.assert_success();
    assert!(output.stdout.contains("4 pages: 4 created"));

    assert!(!project.project_path().join("output/en").exists());
    assert!(project.read_page("fr", "Givre.wiki").unwrap().ends_with("[[en:Frost]]"));
}

#[test]
fn test_generate_unknown_language_fails() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["generate", "--language", "de"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Language 'de' is not configured"));
}

#[test]
fn test_generate_custom_output_directory() {
    let project = TestProject::new().unwrap();
    let output_dir = project.project_path().join("pages");

    project
        .command()
        .args(["generate", "--output"])
        .arg(&output_dir)
        .assert()
        .success();

    assert!(output_dir.join("en").join("Ivy.wiki").exists());
    assert!(!project.project_path().join("output").exists());
}

/// Quiet mode suppresses the summary
#[test]
fn test_generate_quiet() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["--quiet", "generate"]).unwrap();
    output.assert_success();
    assert!(output.stdout.is_empty());
    assert!(project.page_path("en", "Ember.wiki").exists());
}

/// Verbose mode lists the edit summary of every written page
#[test]
fn test_generate_verbose_lists_edit_summaries() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["--verbose", "generate", "--language", "en"]).unwrap();
    output.assert_success();
    let summaries: Vec<&str> = output.stdout.lines().filter(|l| l.contains("] Update from ")).collect();
    assert_eq!(summaries.len(), 4);
    assert!(summaries.iter().all(|l| l.trim_start().starts_with("[en] Update from ")));
    assert!(summaries.iter().any(|l| l.ends_with("(Ember)")));

    let output = project.run_wikigen(&["--verbose", "generate", "--language", "en"]).unwrap();
    output.assert_success();
    assert!(!output.stdout.contains("] Update from "));
}

/// Generation refuses to run on a template cycle
#[test]
fn test_generate_refuses_template_cycle() {
    let fixture = ProjectFixture::default()
        .with_elements_templates("a:\n  x: '**b.y**'\nb:\n  y: '**a.x**'\n");
    let project = TestProject::with_fixture(fixture).unwrap();

    let output = project.run_wikigen(&["generate"]).unwrap();
    output.assert_failure();
    assert!(output.stderr.contains("Template reference cycle detected"));
    assert!(!project.project_path().join("output").exists());
}

#[test]
fn test_missing_config_suggests_fix() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["--config", "missing.toml", "generate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file 'missing.toml' not found"))
        .stderr(predicate::str::contains("--config <PATH>"));
}

/// `WIKIGEN_CONFIG` points at a project outside the working directory
#[test]
fn test_config_from_environment() {
    let project = TestProject::new().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();

    let mut cmd = project.command();
    cmd.current_dir(elsewhere.path())
        .env("WIKIGEN_CONFIG", project.config_path())
        .args(["generate"])
        .assert()
        .success();

    assert!(project.page_path("fr", "Lierre.wiki").exists());
}
