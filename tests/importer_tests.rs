// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use khata::catalog::Catalog;
use khata::commands::importer;
use khata::models::{ExpenseDraft, ExpenseRecord};
use khata::report;
use khata::store::Store;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn draft(date: &str, category: &str, subcategory: &str, amount: &str) -> ExpenseDraft {
    ExpenseDraft {
        date: date.parse().unwrap(),
        category: category.into(),
        subcategory: subcategory.into(),
        description: Some("Weekly run".into()),
        amount: amount.parse().unwrap(),
        payment_mode: "UPI".into(),
    }
}

#[test]
fn reimports_an_exported_csv() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::builtin();

    let mut source = Store::open(dir.path().join("source.json"));
    source
        .insert_many(vec![
            draft("2024-03-01", "Groceries", "Vegetables", "100"),
            draft("2024-03-15", "Transportation", "Fuel/Petrol", "500"),
        ])
        .unwrap();

    let csv_path = dir.path().join("export.csv");
    std::fs::write(&csv_path, report::to_csv(source.records())).unwrap();

    let mut target = Store::open(dir.path().join("target.json"));
    let count =
        importer::import_csv(&mut target, catalog, &csv_path.to_string_lossy()).unwrap();
    assert_eq!(count, 2);

    let a: &ExpenseRecord = &target.records()[0];
    assert_eq!(a.date.to_string(), "2024-03-01");
    assert_eq!(a.category, "Groceries");
    assert_eq!(a.subcategory, "Vegetables");
    assert_eq!(a.description.as_deref(), Some("Weekly run"));
    assert_eq!(a.amount, Decimal::from(100));
    assert_eq!(a.payment_mode, "UPI");
}

#[test]
fn rejects_a_non_positive_amount() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::builtin();
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "Date,Category,Subcategory,Description,Amount,Payment Mode\n\
         2024-03-01,Groceries,Vegetables,,0,Cash\n",
    )
    .unwrap();

    let mut store = Store::open(dir.path().join("target.json"));
    let err = importer::import_csv(&mut store, catalog, &csv_path.to_string_lossy());
    assert!(err.is_err());
    assert!(store.records().is_empty());
}

#[test]
fn rejects_an_unknown_category() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::builtin();
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "Date,Category,Subcategory,Description,Amount,Payment Mode\n\
         2024-03-01,Time Travel,Tickets,,50,Cash\n",
    )
    .unwrap();

    let mut store = Store::open(dir.path().join("target.json"));
    assert!(importer::import_csv(&mut store, catalog, &csv_path.to_string_lossy()).is_err());
}

#[test]
fn a_bad_row_aborts_the_whole_import() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::builtin();
    let csv_path = dir.path().join("mixed.csv");
    std::fs::write(
        &csv_path,
        "Date,Category,Subcategory,Description,Amount,Payment Mode\n\
         2024-03-01,Groceries,Vegetables,,100,Cash\n\
         not-a-date,Groceries,Fruits,,50,Cash\n",
    )
    .unwrap();

    let mut store = Store::open(dir.path().join("target.json"));
    assert!(importer::import_csv(&mut store, catalog, &csv_path.to_string_lossy()).is_err());
    assert!(store.records().is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let catalog = Catalog::builtin();
    let mut store = Store::open(dir.path().join("target.json"));
    assert!(importer::import_csv(&mut store, catalog, "no-such-file.csv").is_err());
}
