//! End-to-end tests for the `finance` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env("FINANCE_LEDGER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn ledger_record(dir: &TempDir) -> serde_json::Value {
    let bytes = std::fs::read(dir.path().join("data").join("personalFinanceData.json")).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn seed_scenario(dir: &TempDir) {
    finance(dir)
        .args(["add", "Salary", "3000", "--type", "income", "--category", "Salary"])
        .args(["--date", "2024-01-05"])
        .assert()
        .success();
    finance(dir)
        .args(["add", "Groceries", "150", "-c", "Food", "-d", "2024-01-06"])
        .assert()
        .success();
}

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);

    finance(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Showing 2 of 2"));

    finance(&dir)
        .args(["list", "--filter", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").not())
        .stdout(predicate::str::contains("Showing 1 of 1"));
}

#[test]
fn test_summary_scenario() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);

    finance(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$2850.00"))
        .stdout(predicate::str::contains("$3000.00"))
        .stdout(predicate::str::contains("$150.00"))
        .stdout(predicate::str::contains("$4850.00"));

    finance(&dir)
        .args(["report", "categories", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Food\": 150"));
}

#[test]
fn test_negative_amount_rejected() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);
    let before = ledger_record(&dir);

    finance(&dir)
        .args(["add", "Refund", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation"));

    assert_eq!(ledger_record(&dir), before);
}

#[test]
fn test_budget_clamps_negative() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["budget", "-100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set to $0.00"));

    assert_eq!(ledger_record(&dir)["monthlyBudget"], 0);
}

#[test]
fn test_export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);
    finance(&dir).args(["budget", "1200"]).assert().success();
    let export_path = dir.path().join("backup.json");

    finance(&dir)
        .arg("export")
        .arg(&export_path)
        .assert()
        .success();

    let exported: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&export_path).unwrap()).unwrap();
    assert_eq!(exported["summary"]["balance"], 2850);
    assert_eq!(exported["monthlyBudget"], 1200);

    let other = TempDir::new().unwrap();
    finance(&other)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transactions"));

    assert_eq!(ledger_record(&other), ledger_record(&dir));
}

#[test]
fn test_malformed_import_leaves_ledger() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);
    let before = ledger_record(&dir);
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"transactions\": [ not json").unwrap();

    finance(&dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import"));

    assert_eq!(ledger_record(&dir), before);
}

#[test]
fn test_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    seed_scenario(&dir);
    let id = ledger_record(&dir)["transactions"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    finance(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));
    finance(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));

    assert_eq!(ledger_record(&dir)["transactions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn test_invalid_date_format_setting_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    finance(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_oversized_amount_rejected() {
    let dir = TempDir::new().unwrap();

    finance(&dir)
        .args(["add", "Huge", "90000000000000000", "--type", "income"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}
