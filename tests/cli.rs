use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

const BIN: &str = "metadata-json-lint";

fn clean_metadata() -> Value {
    json!({
        "name": "puppetlabs-ntp",
        "version": "1.0.0",
        "author": "puppetlabs",
        "license": "Apache-2.0",
        "summary": "Installs and configures NTP",
        "source": "https://github.com/puppetlabs/puppetlabs-ntp",
        "dependencies": [
            {"name": "puppetlabs-stdlib", "version_requirement": ">= 4.13.1 < 9.0.0"}
        ]
    })
}

fn write_metadata(value: &Value) -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("metadata.json"),
        serde_json::to_string_pretty(value).unwrap(),
    )
    .unwrap();
    dir
}

/// A command running in `dir` with no lint settings inherited from the environment.
fn lint_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.current_dir(dir)
        .env_remove("METADATA_JSON_LINT_CONFIG")
        .env_remove("METADATA_JSON_LINT_FAIL_ON_WARNINGS")
        .env_remove("METADATA_JSON_LINT_STRICT_LICENSE")
        .env_remove("METADATA_JSON_LINT_STRICT_DEPENDENCIES")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--no-strict-license"))
        .stdout(predicate::str::contains("--strict-dependencies"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_clean_file_prints_nothing() {
    let dir = write_metadata(&clean_metadata());
    lint_in(dir.path())
        .arg("metadata.json")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_defaults_to_metadata_json_in_cwd() {
    let dir = write_metadata(&clean_metadata());
    lint_in(dir.path()).assert().success();

    let empty = tempdir().unwrap();
    lint_in(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata.json"));
}

#[test]
fn test_missing_required_fields() {
    let mut value = clean_metadata();
    let obj = value.as_object_mut().unwrap();
    obj.remove("author");
    obj.remove("source");
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: Required field 'author' not found"))
        .stdout(predicate::str::contains("Error: Required field 'source' not found"))
        .stderr(predicate::str::contains("Errors found in metadata.json"));
}

#[test]
fn test_deprecated_fields() {
    let mut value = clean_metadata();
    value["types"] = json!([]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Deprecated field 'types' found"));
}

#[test]
fn test_summary_too_long() {
    let mut value = clean_metadata();
    value["summary"] = json!("a".repeat(145));
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("summary exceeds 144 characters"));
}

#[test]
fn test_unknown_license_strict_and_lenient() {
    let mut value = clean_metadata();
    value["license"] = json!("Made-Up-1.0");
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Warning: License identifier Made-Up-1.0 is not in the SPDX list",
        ));

    lint_in(dir.path())
        .arg("--no-strict-license")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: License identifier Made-Up-1.0"));
}

#[test]
fn test_proprietary_license_is_accepted() {
    let mut value = clean_metadata();
    value["license"] = json!("proprietary");
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_fail_on_warnings_reports_but_succeeds() {
    let dir = write_metadata(&json!({}));

    lint_in(dir.path())
        .arg("--no-fail-on-warnings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Required field 'name' not found"));
}

#[test]
fn test_open_ended_dependency() {
    let mut value = clean_metadata();
    value["dependencies"] = json!([
        {"name": "puppetlabs-stdlib", "version_requirement": ">= 4.13.1"}
    ]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Dependency puppetlabs-stdlib has an open ended dependency version requirement >= 4.13.1",
        ));

    lint_in(dir.path())
        .arg("--strict-dependencies")
        .assert()
        .failure()
        .stdout(predicate::str::contains("open ended dependency version requirement"));
}

#[test]
fn test_duplicate_and_invalid_dependencies() {
    let mut value = clean_metadata();
    value["dependencies"] = json!([
        {"name": "puppetlabs-stdlib", "version_requirement": ">= 1.0.0 < 2.0.0"},
        {"name": "puppetlabs-stdlib", "version_requirement": ">= 1.0.0 < 2.0.0"},
        {"name": "puppetlabs-concat", "version_requirement": "not-a-version"}
    ]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate dependencies on puppetlabs-stdlib"))
        .stdout(predicate::str::contains("Invalid 'version_requirement' field"));
}

#[test]
fn test_valid_tags_do_not_clear_earlier_errors() {
    let mut value = clean_metadata();
    value.as_object_mut().unwrap().remove("summary");
    value["tags"] = json!(["ntp", "time"]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Required field 'summary' not found"))
        .stdout(predicate::str::contains("tags").not());
}

#[test]
fn test_tag_error_after_earlier_error_reports_both() {
    let mut value = clean_metadata();
    value.as_object_mut().unwrap().remove("summary");
    value["tags"] = json!(["a b"]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: Required field 'summary' not found"))
        .stdout(predicate::str::contains("Error: tags must not contain any whitespace"))
        .stderr(predicate::str::contains("Errors found in metadata.json"));
}

#[test]
fn test_malformed_dependency_does_not_hide_the_rest() {
    let mut value = clean_metadata();
    value["dependencies"] = json!([
        {"name": "a-c", "version_requirement": ">= 1.0.0"},
        {"name": "a-d", "version_requirement": null},
        {"name": "a-c"},
        {"name": 5}
    ]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate dependencies on a-c"))
        .stdout(predicate::str::contains(
            "Dependency a-c has an open ended dependency version requirement >= 1.0.0",
        ))
        .stdout(predicate::str::contains(
            "Dependency a-d has an open ended dependency version requirement",
        ))
        .stdout(predicate::str::contains(
            "dependencies must be an array of objects with a 'name' string",
        ));
}

#[test]
fn test_tags_with_whitespace() {
    let mut value = clean_metadata();
    value["tags"] = json!(["time sync"]);
    let dir = write_metadata(&value);

    lint_in(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("tags must not contain any whitespace"));
}

#[test]
fn test_invalid_json_is_fatal() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("metadata.json"), "{ not json").unwrap();

    lint_in(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse"));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempdir().unwrap();
    lint_in(dir.path())
        .arg("nowhere/metadata.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read"));
}

#[test]
fn test_json_format() {
    let mut value = clean_metadata();
    value["license"] = json!("Made-Up-1.0");
    value.as_object_mut().unwrap().remove("author");
    let dir = write_metadata(&value);

    let output = lint_in(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["result"], "Errors found in metadata.json");
    assert_eq!(report["errors"][0]["check"], "required-fields");
    assert_eq!(report["errors"][0]["msg"], "Required field 'author' not found");
    assert_eq!(report["warnings"][0]["check"], "license");
}

#[test]
fn test_project_config_file() {
    let mut value = clean_metadata();
    value["license"] = json!("Made-Up-1.0");
    let dir = write_metadata(&value);
    std::fs::write(
        dir.path().join(".metadata-json-lint.toml"),
        "strict_license = false\n",
    )
    .unwrap();

    lint_in(dir.path()).assert().success();

    // Flags beat the config file.
    lint_in(dir.path()).arg("--strict-license").assert().failure();
}

#[test]
fn test_env_override() {
    let dir = write_metadata(&json!({}));

    lint_in(dir.path())
        .env("METADATA_JSON_LINT_FAIL_ON_WARNINGS", "false")
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let dir = write_metadata(&clean_metadata());
    lint_in(dir.path())
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_list_rules() {
    let dir = tempdir().unwrap();
    lint_in(dir.path())
        .arg("--list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("required-fields"))
        .stdout(predicate::str::contains("summary-length"))
        .stdout(predicate::str::contains("requirements"));

    let output = lint_in(dir.path())
        .args(["--list-rules", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rules: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules.as_array().unwrap().len(), 7);
    assert_eq!(rules[0]["id"], "required-fields");
}
