// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::catalog::Catalog;
use crate::models::ExpenseDraft;
use crate::store::Store;
use crate::utils::{parse_amount, parse_date};

pub fn handle(store: &mut Store, catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let count = import_csv(store, catalog, path)?;
    println!("Imported {} expenses from {}", count, path);
    Ok(())
}

/// Reads a previously exported CSV back through the entry validation
/// boundary. Any malformed row aborts the whole import; nothing is written
/// until every row has passed.
pub fn import_csv(store: &mut Store, catalog: &Catalog, path: &str) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut drafts = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = i + 2; // header is line 1
        let date_raw = rec
            .get(0)
            .with_context(|| format!("date missing on line {}", line))?
            .trim();
        let category = rec
            .get(1)
            .with_context(|| format!("category missing on line {}", line))?
            .trim()
            .to_string();
        let subcategory = rec
            .get(2)
            .with_context(|| format!("subcategory missing on line {}", line))?
            .trim()
            .to_string();
        let description = rec
            .get(3)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        let amount_raw = rec
            .get(4)
            .with_context(|| format!("amount missing on line {}", line))?
            .trim();
        let payment_mode = rec
            .get(5)
            .with_context(|| format!("payment mode missing on line {}", line))?
            .trim()
            .to_string();

        let draft = ExpenseDraft {
            date: parse_date(date_raw).with_context(|| format!("Invalid date on line {}", line))?,
            category,
            subcategory,
            description,
            amount: parse_amount(amount_raw)
                .with_context(|| format!("Invalid amount on line {}", line))?,
            payment_mode,
        };
        draft
            .validate(catalog)
            .with_context(|| format!("Rejected expense on line {}", line))?;
        drafts.push(draft);
    }

    let ids = store.insert_many(drafts)?;
    Ok(ids.len())
}
