use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn syncwave_cmd() -> Command {
    Command::cargo_bin("syncwave").unwrap()
}

const SAMPLE: &str = r#"
[plan]
all-topic = "all"
untagged-topic = "all_untagged"

[plan.groups]
pair = ["account", "colors"]

[emitter.account]
topics = ["acct"]

[emitter.colors]
topics = ["draw"]
syncs-after = ["account"]

[emitter.objects]
syncs-after = ["colors"]
triggered-by = ["account"]
"#;

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Syncwave.toml"), SAMPLE).unwrap();
    tmp
}

#[test]
fn test_plan_writes_generated_files() {
    let tmp = project();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote plan.json and emitters.rs"));

    let plan = std::fs::read_to_string(tmp.path().join("generated/plan.json")).unwrap();
    assert!(plan.contains("\"emitters\""));
    assert!(plan.contains("\"waves\""));
    assert!(plan.contains("\"account\""));

    let registry = std::fs::read_to_string(tmp.path().join("generated/emitters.rs")).unwrap();
    assert!(registry.contains("pub static EMITTERS"));
    assert!(registry.contains("@generated by syncwave"));
}

#[test]
fn test_plan_honors_out_dir() {
    let tmp = project();

    syncwave_cmd()
        .current_dir(tmp.path())
        .args(["plan", "--out-dir", "build/sync"])
        .assert()
        .success();

    assert!(tmp.path().join("build/sync/plan.json").is_file());
    assert!(tmp.path().join("build/sync/emitters.rs").is_file());
}

#[test]
fn test_plan_is_stable_across_runs() {
    let tmp = project();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("plan")
        .assert()
        .success();
    let first = std::fs::read_to_string(tmp.path().join("generated/plan.json")).unwrap();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("plan")
        .assert()
        .success();
    let second = std::fs::read_to_string(tmp.path().join("generated/plan.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_plan_fails_on_unknown_group_member() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("Syncwave.toml"),
        r#"
[plan]

[plan.groups]
bad = ["ghost"]

[emitter.account]
"#,
    )
    .unwrap();

    syncwave_cmd()
        .current_dir(tmp.path())
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));

    assert!(!tmp.path().join("generated/plan.json").exists());
}
