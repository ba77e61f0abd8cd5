// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use khata::catalog::Catalog;
use khata::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = store::Store::open_default()?;
    let catalog = Catalog::load_or_builtin(&store::catalog_path()?);

    match matches.subcommand() {
        Some(("tx", sub)) => commands::expenses::handle(&mut store, &catalog, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, &catalog, sub)?,
        Some(("analytics", sub)) => commands::analytics::handle(&store, &catalog, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, &catalog, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, &catalog, sub)?,
        Some(("catalog", sub)) => commands::catalog::handle(&catalog, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
