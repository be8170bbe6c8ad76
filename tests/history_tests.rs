//! Integration tests for the history command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::goodday_cmd;

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    goodday_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_history_empty_day() {
    let temp = init_journal();

    goodday_cmd()
        .current_dir(temp.path())
        .args(["history", "--date", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood for 2025-01-17"))
        .stdout(predicate::str::contains("No mood entries for this date."));
}

#[test]
fn test_history_shows_todays_entries() {
    let temp = init_journal();

    goodday_cmd()
        .current_dir(temp.path())
        .args(["log", "points", "7", "--notes", "walk"])
        .assert()
        .success();

    // Default date is today, so the fresh entry must appear
    goodday_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("+7  walk"));
}

#[test]
fn test_history_invalid_date_fails() {
    let temp = init_journal();

    goodday_cmd()
        .current_dir(temp.path())
        .args(["history", "--date", "17-01-2025"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_history_skips_malformed_records() {
    let temp = init_journal();

    goodday_cmd()
        .current_dir(temp.path())
        .args(["log", "points", "3", "--notes", "valid"])
        .assert()
        .success();

    // Corrupt one record in place; the valid sibling must survive
    let path = temp.path().join(".goodday/mood_data.json");
    let data = fs::read_to_string(&path).unwrap();
    let mut records: Vec<serde_json::Value> = serde_json::from_str(&data).unwrap();
    records.push(serde_json::json!({
        "timestamp": "2025-06-02T09:00:00Z",
        "moodValue": "not a number",
        "notes": "bad",
        "mode": "points"
    }));
    fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();

    goodday_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("skipped 1 malformed record(s)"));
}

#[test]
fn test_history_corrupt_store_fails() {
    let temp = init_journal();

    fs::write(temp.path().join(".goodday/mood_data.json"), "{ not json").unwrap();

    goodday_cmd()
        .current_dir(temp.path())
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}
