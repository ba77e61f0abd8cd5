// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::query;
use crate::store::Store;
use crate::utils::{fmt_rupees, text_bar};

pub fn handle(store: &Store, catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    if store.records().is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }
    match m.get_one::<String>("category") {
        Some(category) => deep_dive(store, catalog, category),
        None => {
            monthly_summary(store);
            daily_pattern(store);
        }
    }
    Ok(())
}

fn monthly_summary(store: &Store) {
    let totals = query::monthly_totals(store.records());
    let max = totals.values().copied().max().unwrap_or(Decimal::ZERO);
    println!("Monthly Expense Summary");
    for (month, amount) in &totals {
        println!(
            "  {} {} {}",
            month,
            text_bar(*amount, max, 30),
            fmt_rupees(*amount)
        );
    }
}

fn deep_dive(store: &Store, catalog: &Catalog, category: &str) {
    let records = query::filter_by_category(store.records(), category);
    if records.is_empty() {
        println!("No expenses in {}", category);
        return;
    }
    println!("{} Summary", category);
    println!("  Total Spent: {}", fmt_rupees(query::total(&records)));
    println!("  Transactions: {}", records.len());
    println!("  Average: {}", fmt_rupees(query::average(&records)));
    println!();
    println!("Subcategory Breakdown");
    let totals = query::subcategory_totals(store.records(), catalog, category);
    let max = totals.values().copied().max().unwrap_or(Decimal::ZERO);
    for (subcategory, amount) in &totals {
        if amount.is_zero() {
            continue;
        }
        println!(
            "  {:<24} {} {}",
            subcategory,
            text_bar(*amount, max, 15),
            fmt_rupees(*amount)
        );
    }
}

fn daily_pattern(store: &Store) {
    let totals = query::daily_totals(store.records());
    let today = Local::now().date_naive();
    let days: Vec<NaiveDate> = (0..7).rev().map(|i| today - Duration::days(i)).collect();
    let max = days
        .iter()
        .filter_map(|d| totals.get(d))
        .copied()
        .max()
        .unwrap_or(Decimal::ZERO);
    println!();
    println!("Last 7 Days");
    for day in days {
        let amount = totals.get(&day).copied().unwrap_or(Decimal::ZERO);
        println!(
            "  {} {} {}",
            day.format("%a %d/%m"),
            text_bar(amount, max, 25),
            fmt_rupees(amount)
        );
    }
}
