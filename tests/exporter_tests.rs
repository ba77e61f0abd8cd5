// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use khata::catalog::Catalog;
use khata::commands::exporter;
use khata::models::ExpenseDraft;
use khata::store::Store;
use khata::cli;
use tempfile::tempdir;

fn seeded_store(dir: &std::path::Path) -> Store {
    let mut store = Store::open(dir.join("expenses.json"));
    store
        .insert(ExpenseDraft {
            date: "2025-01-02".parse().unwrap(),
            category: "Groceries".into(),
            subcategory: "Dairy".into(),
            description: Some("Weekly run".into()),
            amount: "12.34".parse().unwrap(),
            payment_mode: "UPI".into(),
        })
        .unwrap();
    store
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["khata", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    export_m.clone()
}

#[test]
fn export_writes_reparseable_json() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(
        &store,
        Catalog::builtin(),
        &export_matches(&["--format", "json", "--out", &out_str]),
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed[0]["date"], "2025-01-02");
    assert_eq!(parsed[0]["category"], "Groceries");
    assert_eq!(parsed[0]["amount"], "12.34");
    assert_eq!(parsed[0]["payment_mode"], "UPI");
}

#[test]
fn export_writes_the_summary_document() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out_path = dir.path().join("summary.txt");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(
        &store,
        Catalog::builtin(),
        &export_matches(&["--format", "summary", "--out", &out_str]),
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("EXPENSE TRACKER - SUMMARY REPORT"));
    assert!(contents.contains("Total Expenses: Rs.12.34"));
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let result = exporter::handle(
        &store,
        Catalog::builtin(),
        &export_matches(&["--format", "xml", "--out", &out_str]),
    );
    assert!(result.is_err());
    assert!(!out_path.exists());
}
