use std::fs;
use std::path::Path;

use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(path: &Path, value: Value) {
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn seed(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    write(
        &dir.join("booker_prize.json"),
        json!([{"Year": 2023, "Award": "Booker Prize", "Status": "Winner",
                "Title": "Prophet Song", "Author": "Paul Lynch"}]),
    );
    write(&dir.join("national_book_award.json"), json!([]));
    write(
        &dir.join("pulitzer_prize.json"),
        json!([{"Year": 2023, "Award": "Pulitzer Prize for Fiction", "Status": "Winner",
                "Title": "Demon Copperhead", "Author": "Barbara Kingsolver"}]),
    );
    write(
        &dir.join("google_books.json"),
        json!({"books": [{"title": "Demon Copperhead", "authors": ["Barbara Kingsolver"],
                          "isbn_13": "9780063251922", "year": 2022}]}),
    );
    write(&dir.join("openlibrary_books.json"), json!({"books": []}));
    write(
        &dir.join("nyt_bestsellers.json"),
        json!({"books": [{"title": "DEMON COPPERHEAD", "author": "Barbara Kingsolver",
                          "rank": 1, "weeks_on_list": 4, "list_name": "hardcover-fiction"}]}),
    );
}

fn litmerge(root: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("litmerge");
    cmd.env("LITMERGE_CONFIG", root.path().join("no-config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("LITMERGE_JSON")
        .arg("--data-dir")
        .arg(root.path().join("data"))
        .arg("--output-dir")
        .arg(root.path().join("out"));
    cmd
}

#[test]
fn merge_writes_dataset_and_prints_table() {
    let root = TempDir::new().unwrap();
    seed(&root.path().join("data"));

    litmerge(&root)
        .arg("merge")
        .assert()
        .success()
        .stdout(predicate::str::contains("MERGE STATISTICS"))
        .stdout(predicate::str::contains("Total unique books: 2"))
        .stdout(predicate::str::contains("merged_literary_books.json"));

    let merged: Value = serde_json::from_str(
        &fs::read_to_string(root.path().join("out/merged_literary_books.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(merged["metadata"]["total_books"], 2);
    let demon = merged["books"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["title"] == "Demon Copperhead")
        .unwrap();
    assert_eq!(demon["sources"], json!(["awards", "google_books", "nyt_bestsellers"]));
    assert_eq!(demon["won_award"], true);
    assert_eq!(demon["isbn_all"], json!(["9780063251922"]));
    assert!(root.path().join("out/merge_report.json").exists());
}

#[test]
fn report_json_writes_nothing() {
    let root = TempDir::new().unwrap();
    seed(&root.path().join("data"));

    let output = litmerge(&root)
        .args(["report", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["data"]["merged_dataset"]["total_unique_books"], 2);
    assert_eq!(value["data"]["source_datasets"]["nyt_bestsellers"]["match_rate"], "100.0%");
    assert!(!root.path().join("out").exists());
}

#[test]
fn missing_input_exits_with_input_code() {
    let root = TempDir::new().unwrap();
    let data = root.path().join("data");
    seed(&data);
    fs::remove_file(data.join("google_books.json")).unwrap();

    litmerge(&root)
        .arg("merge")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("google_books phase failed"))
        .stderr(predicate::str::contains("google_books.json"));
}

#[test]
fn invalid_threshold_is_rejected() {
    let root = TempDir::new().unwrap();
    seed(&root.path().join("data"));

    litmerge(&root)
        .args(["merge", "--threshold", "1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("fuzzy_threshold"));
}

#[test]
fn config_prints_effective_toml() {
    let root = TempDir::new().unwrap();

    litmerge(&root)
        .args(["config", "--threshold", "0.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[matching]"))
        .stdout(predicate::str::contains("fuzzy_threshold = 0.9"))
        .stdout(predicate::str::contains("google_books.json"));
}

#[test]
fn verbose_logs_to_stderr() {
    let root = TempDir::new().unwrap();
    seed(&root.path().join("data"));

    litmerge(&root)
        .args(["report", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"))
        .stderr(predicate::str::contains("Merging Awards data"))
        .stderr(predicate::str::contains("hardcover-fiction"));
}
