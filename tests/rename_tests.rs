//! End-to-end rename tests (directory and manifests)

mod common;

use common::*;

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_simple_rename() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project"])
        .success()
        .stdout(predicate::str::contains("Successfully renamed"));

    let renamed = temp.path().join("new-project");
    assert!(!project.exists());
    assert!(renamed.is_dir());
    assert!(renamed.join("pipeline/__init__.py").exists());
}

#[test]
fn test_primary_manifest_only_name_changes() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project"]).success();

    let pyproject = fs::read_to_string(temp.path().join("new-project/pyproject.toml")).unwrap();
    assert_eq!(
        pyproject,
        PYPROJECT.replace(r#"name = "old-project""#, r#"name = "new-project""#)
    );
}

#[test]
fn test_secondary_manifest_quotes_normalized() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project"]).success();

    let setup = fs::read_to_string(temp.path().join("new-project/setup.py")).unwrap();
    assert!(setup.contains("name='new-project',"));
    assert!(!setup.contains("old-project"));
    assert_eq!(
        setup,
        SETUP_PY.replace(r#"name="old-project""#, "name='new-project'")
    );
}

#[test]
fn test_missing_secondary_manifest_is_not_an_error() {
    let (temp, project) = create_test_project();
    fs::remove_file(project.join("setup.py")).unwrap();

    run_rename(&project, &["new-project", "--from", "old-project"])
        .success()
        .stdout(predicate::str::contains("pyproject.toml"))
        .stdout(predicate::str::contains("setup.py").not());

    let renamed = temp.path().join("new-project");
    assert!(!renamed.join("setup.py").exists());
}

#[test]
fn test_prints_checklist_per_completed_step() {
    let (_temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project"])
        .success()
        .stdout(predicate::str::contains("Renamed directory old-project → new-project"))
        .stdout(predicate::str::contains("Updated pyproject.toml"))
        .stdout(predicate::str::contains("Updated setup.py"));
}

#[test]
fn test_inferred_old_name() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project"]).success();

    let pyproject = fs::read_to_string(temp.path().join("new-project/pyproject.toml")).unwrap();
    assert!(pyproject.contains(r#"name = "new-project""#));
}

#[test]
fn test_directory_flag() {
    let (temp, project) = create_test_project();

    run_rename(
        temp.path(),
        &["new-project", "-C", project.to_str().unwrap()],
    )
    .success();

    assert!(temp.path().join("new-project").is_dir());
}

#[test]
fn test_second_run_fails_with_wrong_directory() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project"]).success();

    let renamed = temp.path().join("new-project");
    run_rename(&renamed, &["new-project", "--from", "old-project"])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Wrong directory"));

    // Without --from the directory already carries the new name
    run_rename(&renamed, &["new-project"])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Wrong directory"));
}

#[test]
fn test_dry_run_does_not_modify() {
    let (temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--from", "old-project", "--dry-run"])
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    assert!(project.is_dir());
    assert!(!temp.path().join("new-project").exists());
    assert_eq!(
        fs::read_to_string(project.join("pyproject.toml")).unwrap(),
        PYPROJECT
    );
    assert_eq!(fs::read_to_string(project.join("setup.py")).unwrap(), SETUP_PY);
}

#[test]
fn test_config_file_supplies_old_name() {
    let (temp, project) = create_test_project();
    let config = temp.path().join("rename.toml");
    fs::write(&config, "[rename]\nold-name = \"old-project\"\n").unwrap();

    run_rename(&project, &["new-project", "--config", config.to_str().unwrap()]).success();

    assert!(temp.path().join("new-project").is_dir());
}

#[test]
fn test_custom_manifest_names_from_config() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("app");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("package.toml"), "name = \"app\"\n").unwrap();
    let config = temp.path().join("rename.toml");
    fs::write(&config, "[rename]\nprimary-manifest = \"package.toml\"\n").unwrap();

    run_rename(&project, &["service", "--config", config.to_str().unwrap()]).success();

    assert_eq!(
        fs::read_to_string(temp.path().join("service/package.toml")).unwrap(),
        "name = \"service\"\n"
    );
}

#[test]
fn test_failed_step_is_reported_but_not_fatal() {
    let (temp, project) = create_test_project();
    fs::write(project.join("setup.py"), b"name='old-project'\xff").unwrap();

    run_rename(&project, &["new-project", "--from", "old-project"])
        .success()
        .stderr(predicate::str::contains("Failed secondary manifest"));

    let renamed = temp.path().join("new-project");
    let pyproject = fs::read_to_string(renamed.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains(r#"name = "new-project""#));
    assert_eq!(
        fs::read(renamed.join("setup.py")).unwrap(),
        b"name='old-project'\xff"
    );
}

#[test]
fn test_strict_turns_failed_step_into_error() {
    let (temp, project) = create_test_project();
    fs::write(project.join("setup.py"), b"name='old-project'\xff").unwrap();

    run_rename(&project, &["new-project", "--from", "old-project", "--strict"])
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed secondary manifest"))
        .stderr(predicate::str::contains("1 step(s) failed"));

    // Steps are not rolled back
    assert!(temp.path().join("new-project").is_dir());
}

#[test]
fn test_strict_without_failures_succeeds() {
    let (_temp, project) = create_test_project();

    run_rename(&project, &["new-project", "--strict"]).success();
}
