use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn tradetail() -> Command {
    let mut cmd = Command::cargo_bin("tradetail").expect("binary built");
    cmd.env_remove("TRADETAIL_API_KEY")
        .env_remove("TRADETAIL_SECRET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn exchanges_lists_builtin_adapters() {
    tradetail()
        .arg("exchanges")
        .assert()
        .success()
        .stdout(predicate::str::contains("btce"))
        .stdout(predicate::str::contains("btcchina"));
}

#[test]
fn exchanges_json_is_line_delimited() {
    let output = tradetail().args(["exchanges", "--json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let values: Vec<String> = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|v| v["type"] == "item")
        .map(|v| v["payload"]["value"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(values, ["btcchina", "btce"]);
}

#[test]
fn unknown_exchange_fails_with_message() {
    tradetail()
        .args(["ticker", "--exchange", "mtgox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exchange 'mtgox'"));
}

#[test]
fn invalid_config_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tail]\ninterval_ms = 0").unwrap();

    tradetail()
        .args(["exchanges", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval"));
}

#[test]
fn balance_without_account_support_fails() {
    tradetail()
        .args(["balance", "--exchange", "btce"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support account balance"));
}

#[test]
fn bad_since_rejected_by_parser() {
    tradetail()
        .args(["watch", "--since", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("since"));
}
