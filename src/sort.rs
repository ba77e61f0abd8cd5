// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseRecord;

/// Stable in both directions: equal dates keep their input order, so the
/// "recent transactions" view and report listings are deterministic.
pub fn by_date(records: &[ExpenseRecord], ascending: bool) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
    } else {
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
    }
    sorted
}

pub fn by_amount(records: &[ExpenseRecord], ascending: bool) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.amount.cmp(&b.amount));
    } else {
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    }
    sorted
}

/// Case-insensitive substring match across description, category, and
/// subcategory; an absent description matches as the empty string. Matches
/// come back in their original order.
pub fn search(records: &[ExpenseRecord], term: &str) -> Vec<ExpenseRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.description_text().to_lowercase().contains(&needle)
                || r.category.to_lowercase().contains(&needle)
                || r.subcategory.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
