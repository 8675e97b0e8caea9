//! End-to-end tests for the `cardval` binary: stream contents and exit codes.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("cardval").unwrap()
}

fn write_card(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn valid_card_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":"Cat","image":"cat.png"}"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(0)
        .stdout(format!("Validation successful: {}.\n", path.display()))
        .stderr("");
}

#[test]
fn short_alias_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":"Cat","image":"cat.png"}"#);
    cmd()
        .args(["-f", &path_arg(&path)])
        .assert()
        .success()
        .stdout(contains("Validation successful"));
}

#[test]
fn missing_image_fails_with_code_1() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":"Cat"}"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(1)
        .stdout("")
        .stderr(format!("Validation failed: {}.\n", path.display()));
}

#[test]
fn non_string_title_fails_with_code_1() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":5,"image":"cat.png"}"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(1)
        .stderr(contains("Validation failed"));
}

#[test]
fn non_object_document_fails_with_code_1() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "list.json", r#"[{"title":"Cat","image":"cat.png"}]"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(1)
        .stderr(contains("Validation failed"));
}

#[test]
fn extra_properties_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "extra.json", r#"{"title":"t","image":"i","extra":1}"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .success()
        .stdout(contains("Validation successful"));
}

#[test]
fn missing_file_reports_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(0)
        .stdout("")
        .stderr(format!("File not found: {}\n", path.display()));
}

#[test]
fn malformed_json_exits_with_distinct_code() {
    let dir = TempDir::new().unwrap();
    for (name, content) in [
        ("plain.json", "not valid json"),
        ("comma.json", r#"{"title":"Cat","image":"cat.png",}"#),
        ("keys.json", r#"{title:"Cat",image:"cat.png"}"#),
    ] {
        let path = write_card(&dir, name, content);
        cmd()
            .args(["--file", &path_arg(&path)])
            .assert()
            .code(2)
            .stdout("")
            .stderr(contains("invalid JSON"))
            .stderr(contains("Validation").not());
    }
}

#[test]
fn invalid_utf8_exits_with_distinct_code() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "latin1.json", b"{\"title\":\"\xff\",\"image\":\"cat.png\"}");
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("invalid JSON"))
        .stderr(contains("Validation").not());
}

#[test]
fn out_of_range_extra_number_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "big.json", r#"{"title":"t","image":"i","extra":1e400}"#);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(0)
        .stdout(format!("Validation successful: {}.\n", path.display()))
        .stderr("");
}

#[test]
fn deeply_nested_extra_is_accepted() {
    let dir = TempDir::new().unwrap();
    for depth in [200, 10_000] {
        let content = format!(
            r#"{{"title":"t","image":"i","extra":{}{}}}"#,
            "[".repeat(depth),
            "]".repeat(depth)
        );
        let path = write_card(&dir, "deep.json", content);
        cmd()
            .args(["--file", &path_arg(&path)])
            .assert()
            .code(0)
            .stdout(contains("Validation successful"));
    }
}

#[test]
fn deeply_nested_document_still_checks_contract() {
    let dir = TempDir::new().unwrap();
    let content = format!(r#"{{"title":"t","extra":{}{}}}"#, "[".repeat(300), "]".repeat(300));
    let path = write_card(&dir, "deep.json", content);
    cmd()
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(1)
        .stderr(contains("Validation failed"));
}

#[test]
fn directory_path_exits_with_operational_code() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["--file", &path_arg(dir.path())])
        .assert()
        .code(2)
        .stderr(contains("cannot read"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":"Cat"}"#);
    let first = cmd().args(["--file", &path_arg(&path)]).output().unwrap();
    let second = cmd().args(["--file", &path_arg(&path)]).output().unwrap();
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn file_argument_is_required() {
    cmd().assert().code(2).stderr(contains("--file"));
}

#[test]
fn help_states_file_is_required() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--file is required"))
        .stdout(contains("-f, --file <FILE>"));
}

#[test]
fn debug_logging_lists_violations_on_stderr() {
    let dir = TempDir::new().unwrap();
    let path = write_card(&dir, "cat.json", r#"{"title":5}"#);
    cmd()
        .env("RUST_LOG", "debug")
        .args(["--file", &path_arg(&path)])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("\"title\" must be a string, found integer"))
        .stderr(contains("\"image\" is a required property"));
}
