use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn syncwave_cmd() -> Command {
    Command::cargo_bin("syncwave").unwrap()
}

#[test]
fn test_init_creates_manifest() {
    let tmp = TempDir::new().unwrap();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Syncwave.toml"));

    let manifest = std::fs::read_to_string(tmp.path().join("Syncwave.toml")).unwrap();
    assert!(manifest.contains("[plan]"));
    assert!(manifest.contains("[emitter.account]"));
    assert!(manifest.contains("triggered-by = [\"account\"]"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Syncwave.toml"), "# existing\n").unwrap();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(tmp.path().join("Syncwave.toml")).unwrap();
    assert_eq!(content, "# existing\n");
}

#[test]
fn test_init_output_resolves_cleanly() {
    let tmp = TempDir::new().unwrap();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 emitters"));
}
