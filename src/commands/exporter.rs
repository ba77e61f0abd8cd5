// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::catalog::Catalog;
use crate::report;
use crate::store::Store;

pub fn handle(store: &Store, catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let label = m.get_one::<String>("label").unwrap();

    let text = match fmt.as_str() {
        "csv" => report::to_csv(store.records()),
        "json" => report::to_json(store.records())?,
        "summary" => report::to_summary(store.records(), catalog),
        "report" => report::to_detailed_report(store.records(), catalog, label),
        _ => bail!("Unknown format: {} (use csv|json|summary|report)", fmt),
    };

    match m.get_one::<String>("out") {
        Some(out) => {
            fs::write(out, text).with_context(|| format!("Write export to {}", out))?;
            println!("Exported expenses to {}", out);
        }
        None => println!("{}", text),
    }
    Ok(())
}
