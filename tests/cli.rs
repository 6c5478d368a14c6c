use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A jotz command with all storage redirected under a temp home.
fn jotz(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jotz").unwrap();
    cmd.env("JOTZ_HOME", home.path());
    cmd
}

#[test]
fn create_write_read_round_trip() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["create", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been created"));

    jotz(&home)
        .args(["write", "alpha", "line1\nline2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write to 'alpha' successful"));

    jotz(&home)
        .args(["read", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line1\nline2"));
}

#[test]
fn duplicate_create_fails() {
    let home = TempDir::new().unwrap();
    jotz(&home).args(["create", "alpha"]).assert().success();

    jotz(&home)
        .args(["create", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn read_missing_file_fails() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["read", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn delete_missing_file_fails() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["delete", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn fourth_create_evicts_the_oldest() {
    let home = TempDir::new().unwrap();
    for name in ["alpha", "bravo", "charlie"] {
        jotz(&home).args(["create", name]).assert().success();
    }

    jotz(&home)
        .args(["create", "delta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Evicted 'alpha'"));

    assert!(!home.path().join("files").join("alpha").exists());
    for name in ["bravo", "charlie", "delta"] {
        assert!(home.path().join("files").join(name).exists());
    }

    jotz(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bravo"))
        .stdout(predicate::str::contains("charlie"))
        .stdout(predicate::str::contains("delta"))
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn cache_flag_targets_the_cache_area() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["create", "alpha", "--cache"])
        .assert()
        .success();

    assert!(home.path().join("cache").join("alpha").exists());
    assert!(!home.path().join("files").join("alpha").exists());
}

#[test]
fn eviction_deletes_in_the_area_the_file_was_created_in() {
    let home = TempDir::new().unwrap();
    jotz(&home).args(["create", "alpha"]).assert().success();
    for name in ["bravo", "charlie"] {
        jotz(&home)
            .args(["create", name, "--cache"])
            .assert()
            .success();
    }

    jotz(&home)
        .args(["create", "delta", "--cache"])
        .assert()
        .success();

    assert!(!home.path().join("files").join("alpha").exists());
    for name in ["bravo", "charlie", "delta"] {
        assert!(home.path().join("cache").join(name).exists());
    }
}

#[test]
fn delete_removes_file_and_tracking() {
    let home = TempDir::new().unwrap();
    jotz(&home).args(["create", "alpha"]).assert().success();

    jotz(&home)
        .args(["delete", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    assert!(!home.path().join("files").join("alpha").exists());
    jotz(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tracked files."));
}

#[test]
fn empty_name_is_rejected() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["create", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn name_with_path_separator_is_rejected() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["create", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn empty_write_content_is_rejected() {
    let home = TempDir::new().unwrap();
    jotz(&home).args(["create", "alpha"]).assert().success();

    jotz(&home)
        .args(["write", "alpha", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Content cannot be empty"));
}

#[test]
fn config_color_round_trip() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["config", "color", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color set to false"));

    jotz(&home)
        .args(["config", "color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    jotz(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color = false"));
}

#[test]
fn path_prints_the_file_location() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .args(["path", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[test]
fn bare_invocation_lists_tracked_files() {
    let home = TempDir::new().unwrap();

    jotz(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tracked files."));
}
