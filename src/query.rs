// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure filters and aggregates over a record slice. Nothing here mutates
//! its input, and every filter preserves the relative order of matches.
//! The wall-clock date-window filters have `_as_of` twins taking the
//! reference date, which is what the tests drive.

use chrono::{Datelike, Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::models::ExpenseRecord;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn filter_today(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    filter_today_as_of(records, today())
}

pub fn filter_today_as_of(records: &[ExpenseRecord], today: NaiveDate) -> Vec<ExpenseRecord> {
    records.iter().filter(|r| r.date == today).cloned().collect()
}

pub fn filter_this_week(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    filter_this_week_as_of(records, today())
}

/// Week starts Monday, inclusive through the reference date.
pub fn filter_this_week_as_of(records: &[ExpenseRecord], today: NaiveDate) -> Vec<ExpenseRecord> {
    let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    filter_date_range(records, week_start, today)
}

pub fn filter_this_month(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    filter_this_month_as_of(records, today())
}

pub fn filter_this_month_as_of(records: &[ExpenseRecord], today: NaiveDate) -> Vec<ExpenseRecord> {
    let month_start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    filter_date_range(records, month_start, today)
}

pub fn filter_this_year(records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
    filter_this_year_as_of(records, today())
}

pub fn filter_this_year_as_of(records: &[ExpenseRecord], today: NaiveDate) -> Vec<ExpenseRecord> {
    let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    filter_date_range(records, year_start, today)
}

/// Inclusive on both bounds.
pub fn filter_date_range(
    records: &[ExpenseRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| start <= r.date && r.date <= end)
        .cloned()
        .collect()
}

pub fn filter_by_category(records: &[ExpenseRecord], category: &str) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

pub fn filter_by_payment_mode(records: &[ExpenseRecord], mode: &str) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|r| r.payment_mode == mode)
        .cloned()
        .collect()
}

pub fn total(records: &[ExpenseRecord]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Mean amount rounded to two decimal places; zero for an empty slice.
pub fn average(records: &[ExpenseRecord]) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    (total(records) / Decimal::from(records.len())).round_dp(2)
}

pub fn max_amount(records: &[ExpenseRecord]) -> Decimal {
    records
        .iter()
        .map(|r| r.amount)
        .max()
        .unwrap_or(Decimal::ZERO)
}

pub fn min_amount(records: &[ExpenseRecord]) -> Decimal {
    records
        .iter()
        .map(|r| r.amount)
        .min()
        .unwrap_or(Decimal::ZERO)
}

/// Per-category totals. Every catalog category is present (zero when
/// unspent); labels outside the catalog accumulate under their own key
/// rather than being dropped.
pub fn category_totals(records: &[ExpenseRecord], catalog: &Catalog) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = catalog
        .categories()
        .map(|c| (c.to_string(), Decimal::ZERO))
        .collect();
    for r in records {
        *totals.entry(r.category.clone()).or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

/// Per-subcategory totals scoped to one category. Keys cover that
/// category's catalog subcategories plus any stale labels encountered.
pub fn subcategory_totals(
    records: &[ExpenseRecord],
    catalog: &Catalog,
    category: &str,
) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = catalog
        .subcategories_for(category)
        .into_iter()
        .flatten()
        .map(|s| (s.clone(), Decimal::ZERO))
        .collect();
    for r in records.iter().filter(|r| r.category == category) {
        *totals.entry(r.subcategory.clone()).or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

pub fn payment_mode_totals(
    records: &[ExpenseRecord],
    catalog: &Catalog,
) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = catalog
        .payment_modes()
        .iter()
        .map(|m| (m.clone(), Decimal::ZERO))
        .collect();
    for r in records {
        *totals
            .entry(r.payment_mode.clone())
            .or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

pub fn daily_totals(records: &[ExpenseRecord]) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals = BTreeMap::new();
    for r in records {
        *totals.entry(r.date).or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

pub fn monthly_totals(records: &[ExpenseRecord]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for r in records {
        *totals.entry(r.month_key()).or_insert(Decimal::ZERO) += r.amount;
    }
    totals
}

/// The n highest-amount records; ties keep their original relative order.
pub fn top_n(records: &[ExpenseRecord], n: usize) -> Vec<ExpenseRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(n);
    sorted
}

/// Share of `whole`, rounded to one decimal place. Zero when `whole` is
/// zero; percentage math never faults on an empty collection.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::ONE_HUNDRED).round_dp(1)
    }
}
