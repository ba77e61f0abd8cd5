// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;

/// One logged expense. The `date` serializes to `YYYY-MM-DD`, so the
/// persisted form sorts lexicographically in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub subcategory: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub payment_mode: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ExpenseRecord {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `YYYY-MM` grouping key.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// The caller-supplied fields of a record; everything except the id and
/// the timestamps, which the ledger owns.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: String,
    pub subcategory: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub payment_mode: String,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown payment mode '{0}'")]
    UnknownPaymentMode(String),
}

impl ExpenseDraft {
    /// Entry validation for `add`/`edit`/`import`. Subcategory pairings are
    /// deliberately not checked: stored records may carry labels from an
    /// older catalog, and reads tolerate them.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if !catalog.has_category(&self.category) {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }
        if !catalog.has_payment_mode(&self.payment_mode) {
            return Err(ValidationError::UnknownPaymentMode(self.payment_mode.clone()));
        }
        Ok(())
    }
}

/// The in-memory collection. Owns id assignment: ids come from a high-water
/// counter and are never handed out twice, even after a delete.
#[derive(Debug, Clone)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeds the id counter above the highest persisted id.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Ledger { records, next_id }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert(&mut self, draft: ExpenseDraft) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        let now = timestamp();
        self.records.push(ExpenseRecord {
            id,
            date: draft.date,
            category: draft.category,
            subcategory: draft.subcategory,
            description: draft.description,
            amount: draft.amount,
            payment_mode: draft.payment_mode,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        });
        id
    }

    /// Replaces all mutable fields of the record with matching id and
    /// refreshes `updated_at`. Returns false (a no-op, not an error) if the
    /// id is absent.
    pub fn update(&mut self, id: i64, draft: ExpenseDraft) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(rec) => {
                rec.date = draft.date;
                rec.category = draft.category;
                rec.subcategory = draft.subcategory;
                rec.description = draft.description;
                rec.amount = draft.amount;
                rec.payment_mode = draft.payment_mode;
                rec.updated_at = Some(timestamp());
                true
            }
            None => false,
        }
    }

    /// Removes the record with matching id; false if absent. The id stays
    /// retired either way.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn find(&self, id: i64) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
