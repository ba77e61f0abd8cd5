// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use khata::models::{ExpenseDraft, ExpenseRecord, Ledger};
use khata::store::Store;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn draft(date: &str, amount: &str) -> ExpenseDraft {
    ExpenseDraft {
        date: date.parse().unwrap(),
        category: "Groceries".into(),
        subcategory: "Dairy".into(),
        description: Some("Milk".into()),
        amount: amount.parse().unwrap(),
        payment_mode: "Cash".into(),
    }
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path().join("expenses.json"));
    assert!(store.records().is_empty());
}

#[test]
fn corrupt_file_opens_empty_and_recovers_on_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(&path, "not json {{").unwrap();

    let mut store = Store::open(&path);
    assert!(store.records().is_empty());

    store.insert(draft("2024-03-01", "100")).unwrap();
    let reopened = Store::open(&path);
    assert_eq!(reopened.records().len(), 1);
}

#[test]
fn insert_assigns_increasing_ids_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    let mut store = Store::open(&path);

    let a = store.insert(draft("2024-03-01", "100")).unwrap();
    let b = store.insert(draft("2024-03-02", "200")).unwrap();
    assert_eq!(a, 1);
    assert_eq!(b, 2);

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<ExpenseRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].id, 1);
    assert!(parsed[0].created_at.is_some());
}

#[test]
fn deleted_ids_are_never_reused() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("expenses.json"));

    let a = store.insert(draft("2024-03-01", "100")).unwrap();
    let before = store.records().len();
    assert!(store.delete(a).unwrap());
    assert_eq!(store.records().len(), before - 1);

    let b = store.insert(draft("2024-03-02", "200")).unwrap();
    assert!(b > a);
}

#[test]
fn ledger_seeds_ids_above_the_persisted_maximum() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 3, "date": "2024-03-01", "category": "Groceries",
             "subcategory": "Dairy", "description": null, "amount": "100",
             "payment_mode": "Cash"},
            {"id": 7, "date": "2024-03-02", "category": "Groceries",
             "subcategory": "Dairy", "description": null, "amount": "200",
             "payment_mode": "UPI"}
        ]"#,
    )
    .unwrap();

    let mut store = Store::open(&path);
    assert_eq!(store.records().len(), 2);
    let id = store.insert(draft("2024-03-03", "300")).unwrap();
    assert_eq!(id, 8);
}

#[test]
fn update_replaces_fields_and_keeps_created_at() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("expenses.json"));
    let id = store.insert(draft("2024-03-01", "100")).unwrap();
    let created_at = store.find(id).unwrap().created_at.clone();

    let mut changed = draft("2024-03-05", "250");
    changed.description = Some("Paneer".into());
    assert!(store.update(id, changed).unwrap());

    let rec = store.find(id).unwrap();
    assert_eq!(rec.amount, Decimal::from(250));
    assert_eq!(rec.description.as_deref(), Some("Paneer"));
    assert_eq!(rec.created_at, created_at);
    assert!(rec.updated_at.is_some());
}

#[test]
fn update_with_unknown_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("expenses.json"));
    store.insert(draft("2024-03-01", "100")).unwrap();

    assert!(!store.update(99, draft("2024-03-05", "250")).unwrap());
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].amount, Decimal::from(100));
}

#[test]
fn delete_with_unknown_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("expenses.json"));
    store.insert(draft("2024-03-01", "100")).unwrap();
    assert!(!store.delete(99).unwrap());
    assert_eq!(store.records().len(), 1);
}

#[test]
fn every_mutation_rewrites_the_whole_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    let mut store = Store::open(&path);
    let a = store.insert(draft("2024-03-01", "100")).unwrap();
    store.insert(draft("2024-03-02", "200")).unwrap();
    store.delete(a).unwrap();

    let parsed: Vec<ExpenseRecord> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, 2);
}

#[test]
fn insert_many_writes_once_and_numbers_in_order() {
    let dir = tempdir().unwrap();
    let mut store = Store::open(dir.path().join("expenses.json"));
    let ids = store
        .insert_many(vec![draft("2024-03-01", "10"), draft("2024-03-02", "20")])
        .unwrap();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.records().len(), 2);
}

#[test]
fn ledger_find_and_len() {
    let mut ledger = Ledger::new();
    let id = ledger.insert(draft("2024-03-01", "100"));
    assert_eq!(ledger.len(), 1);
    assert!(!ledger.is_empty());
    assert!(ledger.find(id).is_some());
    assert!(ledger.find(id + 1).is_none());
}
