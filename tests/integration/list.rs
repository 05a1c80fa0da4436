use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_list_all_languages() {
    let project = TestProject::new().unwrap();

    let output = project.run_wikigen(&["list"]).unwrap();
    output.assert_success();

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "en (4 pages)",
            "  Ember",
            "  Frost",
            "  Heroes",
            "  Ivy",
            "fr (4 pages)",
            "  Braise",
            "  Givre",
            "  Héros",
            "  Lierre",
        ]
    );
    assert!(!project.project_path().join("output").exists());
}

#[test]
fn test_list_selected_language() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["list", "-l", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fr (4 pages)"))
        .stdout(predicate::str::contains("en (").not());
}
