use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn autho(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_autho"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn plans_json_lists_five_rows() {
    let dir = tempdir().unwrap();
    let output = autho(&dir).args(["plans", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["tier"], "free");
    assert_eq!(rows[2]["popular"], true);
    assert_eq!(rows[4]["marketplace_sku"], "author-enterprise");
}

#[test]
fn plans_text_marks_the_popular_plan() {
    let dir = tempdir().unwrap();
    autho(&dir)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("Professional *"))
        .stdout(predicate::str::contains("$499+"));
}

#[test]
fn show_accepts_display_names() {
    let dir = tempdir().unwrap();
    autho(&dir)
        .args(["show", "Starter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("save 17%"))
        .stdout(predicate::str::contains("author-starter"))
        .stdout(predicate::str::contains("Next tier: Professional at $79/month"));

    autho(&dir)
        .args(["show", "enterprise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next tier").not());

    autho(&dir)
        .args(["show", "platinum"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tier 'platinum'"));
}

#[test]
fn sku_lookup() {
    let dir = tempdir().unwrap();
    autho(&dir)
        .args(["sku", "author-business"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Business (Azure Marketplace)"));

    autho(&dir)
        .args(["sku", "author-framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IBM Cloud"));

    autho(&dir).args(["sku", "author-nope"]).assert().failure();
}

#[test]
fn builtin_catalog_lints_clean() {
    let dir = tempdir().unwrap();
    autho(&dir).arg("lint").assert().success().stdout(predicate::str::contains("No findings."));
}

#[test]
fn list_rules_names_every_catalog_rule() {
    let dir = tempdir().unwrap();
    autho(&dir)
        .args(["lint", "--list-rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tier-coverage"))
        .stdout(predicate::str::contains("exactly one plan is marked popular"));

    let out = autho(&dir).args(["lint", "--list-rules", "--json"]).assert().success();
    let rules: serde_json::Value = serde_json::from_slice(&out.get_output().stdout).unwrap();
    let ids: Vec<_> = rules.as_array().unwrap().iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 9);
    assert_eq!(ids.first(), Some(&"tier-coverage"));
    assert_eq!(ids.last(), Some(&"popular-plan"));
}

#[test]
fn wrong_multiplier_fails_lint() {
    let dir = tempdir().unwrap();
    autho(&dir)
        .args(["lint", "--multiplier", "12", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"annual-pricing\""));
}

#[test]
fn rendered_sheet_checks_clean() {
    let dir = tempdir().unwrap();
    autho(&dir).args(["render", "--output", "PRICING.md"]).assert().success();
    autho(&dir).arg("check").assert().success();

    let path = dir.path().join("PRICING.md");
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, text.replacen("| **Starter** | $29 | $290 |", "| **Starter** | $29 | $300 |", 1))
        .unwrap();
    autho(&dir)
        .args(["check", "PRICING.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("doc-annual"));
}

#[test]
fn missing_document_is_a_runtime_error() {
    let dir = tempdir().unwrap();
    autho(&dir).arg("check").assert().code(2).stderr(predicate::str::contains("PRICING.md"));
}

#[test]
fn exported_catalog_loads_back() {
    let dir = tempdir().unwrap();
    let output = autho(&dir).args(["export", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    fs::write(dir.path().join("catalog.json"), &output.stdout).unwrap();

    autho(&dir).args(["--catalog", "catalog.json", "lint"]).assert().success();
}

#[test]
fn config_file_and_env_overrides() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("autho.toml"), "[lint]\nannual_multiplier = 12\n").unwrap();
    autho(&dir).arg("lint").assert().code(1);

    autho(&dir).arg("lint").env("AUTHO__LINT__ANNUAL_MULTIPLIER", "10").assert().success();

    autho(&dir).args(["--config", "nope.toml", "plans"]).assert().code(2);
}
