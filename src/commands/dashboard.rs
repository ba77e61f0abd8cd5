// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::store::Store;
use crate::utils::{fmt_rupees, text_bar};
use crate::{query, sort};

pub fn handle(store: &Store, catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    let period = m.get_one::<String>("period").unwrap().as_str();
    let records = match period {
        "today" => query::filter_today(store.records()),
        "week" => query::filter_this_week(store.records()),
        "month" => query::filter_this_month(store.records()),
        "year" => query::filter_this_year(store.records()),
        _ => store.records().to_vec(),
    };
    let total = query::total(&records);

    println!("Period: {}", period_label(period));
    println!("Total Expenses: {}", fmt_rupees(total));
    println!("Transactions: {}", records.len());
    println!("Average: {}", fmt_rupees(query::average(&records)));
    println!("Highest: {}", fmt_rupees(query::max_amount(&records)));

    if records.is_empty() {
        println!();
        println!("No expenses recorded for this period.");
        return Ok(());
    }

    print_breakdown(
        "Category Breakdown",
        &query::category_totals(&records, catalog),
        total,
    );
    print_breakdown(
        "Payment Mode Breakdown",
        &query::payment_mode_totals(&records, catalog),
        total,
    );

    println!();
    println!("Recent Transactions");
    for r in sort::by_date(&records, false).iter().take(5) {
        let note = if r.description_text().is_empty() {
            String::new()
        } else {
            format!(" | {}", r.description_text())
        };
        println!(
            "  {} | {} -> {} | {} | {}{}",
            r.date,
            r.category,
            r.subcategory,
            fmt_rupees(r.amount),
            r.payment_mode,
            note
        );
    }
    Ok(())
}

fn period_label(period: &str) -> &'static str {
    match period {
        "today" => "Today",
        "week" => "This Week",
        "month" => "This Month",
        "year" => "This Year",
        _ => "All Time",
    }
}

fn print_breakdown(title: &str, totals: &BTreeMap<String, Decimal>, grand_total: Decimal) {
    let max = totals.values().copied().max().unwrap_or(Decimal::ZERO);
    println!();
    println!("{}", title);
    for (label, amount) in totals {
        if amount.is_zero() {
            continue;
        }
        println!(
            "  {:<24} {} {} ({:.1}%)",
            label,
            text_bar(*amount, max, 15),
            fmt_rupees(*amount),
            query::percent_of(*amount, grand_total)
        );
    }
}
