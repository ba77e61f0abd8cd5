// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::catalog::Catalog;
use crate::models::{ExpenseDraft, ExpenseRecord};
use crate::store::Store;
use crate::utils::{fmt_rupees, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::{query, sort};

pub fn handle(store: &mut Store, catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, catalog, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, catalog, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, catalog: &Catalog, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s.trim())?,
        None => Local::now().date_naive(),
    };
    let draft = ExpenseDraft {
        date,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
        subcategory: sub
            .get_one::<String>("subcategory")
            .unwrap()
            .trim()
            .to_string(),
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        amount: parse_amount(sub.get_one::<String>("amount").unwrap().trim())?,
        payment_mode: sub.get_one::<String>("payment").unwrap().trim().to_string(),
    };
    draft.validate(catalog)?;
    let amount = draft.amount;
    let id = store.insert(draft)?;
    println!("Recorded {} on {} (id: {})", fmt_rupees(amount), date, id);
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(store.records(), sub);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let total = query::total(&rows);
        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.to_string(),
                    r.category.clone(),
                    r.subcategory.clone(),
                    r.description_text().to_string(),
                    fmt_rupees(r.amount),
                    r.payment_mode.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Id",
                    "Date",
                    "Category",
                    "Subcategory",
                    "Description",
                    "Amount",
                    "Payment"
                ],
                table_rows,
            )
        );
        println!("{} expenses | Total: {}", rows.len(), fmt_rupees(total));
    }
    Ok(())
}

/// The filter/sort/limit chain behind `tx list`; separated for tests.
pub fn query_rows(records: &[ExpenseRecord], sub: &clap::ArgMatches) -> Vec<ExpenseRecord> {
    let mut rows = records.to_vec();
    if let Some(cat) = sub.get_one::<String>("category") {
        rows = query::filter_by_category(&rows, cat);
    }
    if let Some(mode) = sub.get_one::<String>("payment") {
        rows = query::filter_by_payment_mode(&rows, mode);
    }
    if let Some(term) = sub.get_one::<String>("search") {
        rows = sort::search(&rows, term);
    }
    let ascending = sub.get_flag("asc");
    rows = match sub.get_one::<String>("sort").map(|s| s.as_str()) {
        Some("amount") => sort::by_amount(&rows, ascending),
        _ => sort::by_date(&rows, ascending),
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    rows
}

fn edit(store: &mut Store, catalog: &Catalog, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(existing) = store.find(id).cloned() else {
        println!("Expense {} not found", id);
        return Ok(());
    };
    let draft = ExpenseDraft {
        date: match sub.get_one::<String>("date") {
            Some(s) => parse_date(s.trim())?,
            None => existing.date,
        },
        category: sub
            .get_one::<String>("category")
            .map(|s| s.trim().to_string())
            .unwrap_or(existing.category),
        subcategory: sub
            .get_one::<String>("subcategory")
            .map(|s| s.trim().to_string())
            .unwrap_or(existing.subcategory),
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or(existing.description),
        amount: match sub.get_one::<String>("amount") {
            Some(s) => parse_amount(s.trim())?,
            None => existing.amount,
        },
        payment_mode: sub
            .get_one::<String>("payment")
            .map(|s| s.trim().to_string())
            .unwrap_or(existing.payment_mode),
    };
    draft.validate(catalog)?;
    if store.update(id, draft)? {
        println!("Updated expense {}", id);
    } else {
        println!("Expense {} not found", id);
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if store.delete(id)? {
        println!("Deleted expense {}", id);
    } else {
        println!("Expense {} not found", id);
    }
    Ok(())
}
