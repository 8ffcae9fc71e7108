//! Integration tests for the projshell binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn projshell() -> Command {
    let mut cmd = Command::cargo_bin("projshell").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// `<label> <value>` lines from plain stdout.
fn field<'a>(stdout: &'a str, label: &str) -> &'a str {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .map(str::trim)
        .unwrap_or_else(|| panic!("missing '{label}' in:\n{stdout}"))
}

#[test]
fn test_demo_is_default() {
    let assert = projshell().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let id = field(&stdout, "Record ID:");
    let parsed = uuid::Uuid::parse_str(id).unwrap();
    assert_eq!(parsed.get_version_num(), 4);

    assert_eq!(
        field(&stdout, "Created record:"),
        format!("Record{{ID: {id}, Name: Alice, Email: alice@example.com}}")
    );
    assert_eq!(field(&stdout, "Valid email:"), "true");
}

#[test]
fn test_demo_subcommand_matches_default() {
    projshell()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alice"))
        .stdout(predicate::str::contains("Valid email: true"));
}

#[test]
fn test_demo_ids_differ_between_runs() {
    let run = || {
        let out = projshell().output().unwrap();
        let stdout = String::from_utf8(out.stdout).unwrap();
        field(&stdout, "Record ID:").to_owned()
    };
    assert_ne!(run(), run());
}

#[test]
fn test_demo_json() {
    let out = projshell()
        .args(["--output-format", "json", "demo"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "alice@example.com");
    assert_eq!(json["valid_email"], true);
    assert!(json["id"].as_str().is_some_and(|id| id.len() == 36));
}

#[test]
fn test_quiet_demo_prints_nothing() {
    projshell()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_demo_survives_bad_env_config() {
    projshell()
        .env("PROJSHELL_RECORDS__ID_STRATEGY", "snowflake")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created record: Record{ID: "))
        .stdout(predicate::str::contains("Record ID: "))
        .stdout(predicate::str::contains("Valid email: true"));
}

#[test]
fn test_demo_survives_broken_default_config_file() {
    let home = TempDir::new().unwrap();
    let with_home = || {
        let mut cmd = projshell();
        cmd.env("HOME", home.path())
            .env("XDG_CONFIG_HOME", home.path().join(".config"));
        cmd
    };

    let out = with_home().args(["config", "path"]).output().unwrap();
    let path = std::path::PathBuf::from(String::from_utf8(out.stdout).unwrap().trim());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "this is = = not toml\n").unwrap();

    with_home()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alice"))
        .stdout(predicate::str::contains("Valid email: true"));

    with_home().args(["config", "list"]).assert().code(4);
}

#[test]
fn test_bad_env_config_still_fails_other_commands() {
    projshell()
        .env("PROJSHELL_RECORDS__ID_STRATEGY", "snowflake")
        .args(["new", "Jane", "jane@example.com"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_new_with_sequence_ids() {
    projshell()
        .args(["new", "Jane Doe", "jane@example.com", "--id-strategy", "sequence"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created record: Record{ID: rec-1, Name: Jane Doe, Email: jane@example.com}",
        ))
        .stdout(predicate::str::contains("Record ID: rec-1"))
        .stdout(predicate::str::contains("Valid email: true"));
}

#[test]
fn test_new_lenient_accepts_bad_email() {
    projshell()
        .args(["new", "Bob", "test @example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid email: false"));
}

#[test]
fn test_new_sequence_prefix_from_env() {
    projshell()
        .env("PROJSHELL_RECORDS__ID_STRATEGY", "sequence")
        .env("PROJSHELL_RECORDS__SEQUENCE_PREFIX", "user")
        .args(["new", "Jane", "jane@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record ID: user-1"));
}

#[test]
fn test_new_strict_from_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("projshell.toml");
    std::fs::write(&path, "[records]\nvalidate_on_create = true\n").unwrap();

    projshell()
        .arg("--config")
        .arg(&path)
        .args(["new", "Bob", "bob@"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a well-formed email"));
}

#[test]
fn test_check_reports_each_address() {
    projshell()
        .args([
            "check",
            "test@example.com",
            "test@mail.example.com",
            "test+tag@example.com",
            "testexample.com",
            "test@",
            "@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("test@example.com: valid"))
        .stdout(predicate::str::contains("test@mail.example.com: valid"))
        .stdout(predicate::str::contains("test+tag@example.com: valid"))
        .stdout(predicate::str::contains("testexample.com: invalid"))
        .stdout(predicate::str::contains("test@: invalid"))
        .stdout(predicate::str::contains("@example.com: invalid"));
}

#[test]
fn test_check_json() {
    let out = projshell()
        .args(["--output-format", "json", "check", "a@b.co", "test @example.com"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"email": "a@b.co", "valid": true},
            {"email": "test @example.com", "valid": false},
        ])
    );
}

#[test]
fn test_config_path_and_get() {
    projshell()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    projshell()
        .args(["config", "get", "records.id_strategy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records.id_strategy = uuid"));
}

#[test]
fn test_help_flag() {
    projshell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    projshell()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_shell_completions() {
    projshell()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projshell"));
}
