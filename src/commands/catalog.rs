// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog::Catalog;
use crate::utils::pretty_table;

pub fn handle(catalog: &Catalog, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = catalog
                .category_defs()
                .iter()
                .map(|c| vec![c.name.clone(), c.subcategories.join(", ")])
                .collect();
            println!("{}", pretty_table(&["Category", "Subcategories"], rows));
        }
        Some(("subcategories", sub)) => {
            let category = sub.get_one::<String>("category").unwrap();
            match catalog.subcategories_for(category) {
                Some(subs) => {
                    let rows: Vec<Vec<String>> = subs.iter().map(|s| vec![s.clone()]).collect();
                    println!("{}", pretty_table(&["Subcategory"], rows));
                }
                None => println!("Unknown category '{}'", category),
            }
        }
        Some(("modes", _)) => {
            let rows: Vec<Vec<String>> = catalog
                .payment_modes()
                .iter()
                .map(|mode| vec![mode.clone()])
                .collect();
            println!("{}", pretty_table(&["Payment Mode"], rows));
        }
        _ => {}
    }
    Ok(())
}
