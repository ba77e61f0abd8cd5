// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Renders a record collection into the exportable text formats: CSV,
//! JSON, a fixed-format summary, and a multi-section detailed report.
//! The timestamped documents have `_as_of` twins for tests.

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::models::ExpenseRecord;
use crate::query;
use crate::sort;
use crate::utils::fmt_rupees;

pub const CSV_HEADER: &str = "Date,Category,Subcategory,Description,Amount,Payment Mode";

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "--------------------------------------------------";

/// Comma-joined lines with no quoting. Commas inside the description would
/// shift the columns, so they become semicolons; every data line carries
/// exactly five field separators.
pub fn to_csv(records: &[ExpenseRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for r in records {
        let description = r.description_text().replace(',', ";");
        lines.push(format!(
            "{},{},{},{},{},{}",
            r.date, r.category, r.subcategory, description, r.amount, r.payment_mode
        ));
    }
    lines.join("\n")
}

/// Full-fidelity serialization, suitable for round-trip re-import.
pub fn to_json(records: &[ExpenseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn to_summary(records: &[ExpenseRecord], catalog: &Catalog) -> String {
    summary_as_of(records, catalog, Local::now().naive_local())
}

pub fn summary_as_of(
    records: &[ExpenseRecord],
    catalog: &Catalog,
    now: NaiveDateTime,
) -> String {
    let grand_total = query::total(records);
    let mut lines = Vec::new();
    lines.push(RULE_HEAVY.to_string());
    lines.push("EXPENSE TRACKER - SUMMARY REPORT".to_string());
    lines.push(format!("Generated: {}", now.format("%Y-%m-%d %H:%M")));
    lines.push(RULE_HEAVY.to_string());
    lines.push(String::new());
    push_scalar_block(&mut lines, records);
    lines.push(String::new());
    push_breakdown(
        &mut lines,
        "CATEGORY-WISE BREAKDOWN",
        &query::category_totals(records, catalog),
        catalog.categories(),
        grand_total,
    );
    lines.push(String::new());
    push_breakdown(
        &mut lines,
        "PAYMENT MODE BREAKDOWN",
        &query::payment_mode_totals(records, catalog),
        catalog.payment_modes().iter().map(|m| m.as_str()),
        grand_total,
    );
    lines.push(String::new());
    lines.push(RULE_HEAVY.to_string());
    lines.join("\n")
}

pub fn to_detailed_report(records: &[ExpenseRecord], catalog: &Catalog, label: &str) -> String {
    detailed_report_as_of(records, catalog, label, Local::now().naive_local())
}

/// Superset of the summary: category breakdown highest first, monthly
/// breakdown in month order, top-10 expenses, and a full newest-first
/// listing with per-record notes.
pub fn detailed_report_as_of(
    records: &[ExpenseRecord],
    catalog: &Catalog,
    label: &str,
    now: NaiveDateTime,
) -> String {
    let grand_total = query::total(records);
    let mut lines = Vec::new();
    lines.push(RULE_HEAVY.to_string());
    lines.push("EXPENSE TRACKER - DETAILED REPORT".to_string());
    lines.push(format!("Period: {}", label));
    lines.push(format!("Generated: {}", now.format("%Y-%m-%d %H:%M")));
    lines.push(RULE_HEAVY.to_string());
    lines.push(String::new());
    push_scalar_block(&mut lines, records);
    lines.push(String::new());

    push_section_rule(&mut lines, "CATEGORY-WISE BREAKDOWN (HIGHEST FIRST)");
    let mut items: Vec<(String, Decimal)> = query::category_totals(records, catalog)
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    for (category, amount) in items {
        lines.push(format!(
            "{}: {} ({:.1}%)",
            category,
            fmt_rupees(amount),
            query::percent_of(amount, grand_total)
        ));
    }
    lines.push(String::new());

    push_section_rule(&mut lines, "MONTHLY BREAKDOWN");
    for (month, amount) in query::monthly_totals(records) {
        lines.push(format!("{}: {}", month, fmt_rupees(amount)));
    }
    lines.push(String::new());

    push_section_rule(&mut lines, "TOP 10 EXPENSES");
    for (i, r) in query::top_n(records, 10).iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, transaction_line(r)));
    }
    lines.push(String::new());

    push_section_rule(&mut lines, "ALL TRANSACTIONS (NEWEST FIRST)");
    for r in sort::by_date(records, false) {
        lines.push(transaction_line(&r));
        if !r.description_text().is_empty() {
            lines.push(format!("    Note: {}", r.description_text()));
        }
    }
    lines.push(String::new());
    lines.push(RULE_HEAVY.to_string());
    lines.join("\n")
}

fn push_scalar_block(lines: &mut Vec<String>, records: &[ExpenseRecord]) {
    lines.push(format!(
        "Total Expenses: {}",
        fmt_rupees(query::total(records))
    ));
    lines.push(format!("Total Transactions: {}", records.len()));
    lines.push(format!(
        "Average Expense: {}",
        fmt_rupees(query::average(records))
    ));
    lines.push(format!(
        "Highest Expense: {}",
        fmt_rupees(query::max_amount(records))
    ));
    lines.push(format!(
        "Lowest Expense: {}",
        fmt_rupees(query::min_amount(records))
    ));
}

fn push_section_rule(lines: &mut Vec<String>, title: &str) {
    lines.push(RULE_LIGHT.to_string());
    lines.push(title.to_string());
    lines.push(RULE_LIGHT.to_string());
}

/// Nonzero labels only, catalog order first, stray labels after.
fn push_breakdown<'a>(
    lines: &mut Vec<String>,
    title: &str,
    totals: &BTreeMap<String, Decimal>,
    catalog_order: impl Iterator<Item = &'a str>,
    grand_total: Decimal,
) {
    push_section_rule(lines, title);
    for label in ordered_labels(totals, catalog_order) {
        let amount = totals.get(&label).copied().unwrap_or(Decimal::ZERO);
        if amount.is_zero() {
            continue;
        }
        lines.push(format!(
            "{}: {} ({:.1}%)",
            label,
            fmt_rupees(amount),
            query::percent_of(amount, grand_total)
        ));
    }
}

fn ordered_labels<'a>(
    totals: &BTreeMap<String, Decimal>,
    catalog_order: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let mut ordered: Vec<String> = catalog_order.map(|s| s.to_string()).collect();
    for label in totals.keys() {
        if !ordered.iter().any(|l| l == label) {
            ordered.push(label.clone());
        }
    }
    ordered
}

fn transaction_line(r: &ExpenseRecord) -> String {
    format!(
        "{} | {} -> {} | {} | {}",
        r.date,
        r.category,
        r.subcategory,
        fmt_rupees(r.amount),
        r.payment_mode
    )
}
