// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("khata")
        .about("Household expense ledger: record, browse, analyze, export")
        .version(crate_version!())
        .subcommand(
            Command::new("tx")
                .about("Record and browse expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("subcategory").long("subcategory").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("payment").long("payment").default_value("Cash"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses with optional filters")
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("payment").long("payment"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Substring match on description/category/subcategory"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["date", "amount"])
                                .default_value("date"),
                        )
                        .arg(
                            Arg::new("asc")
                                .long("asc")
                                .action(ArgAction::SetTrue)
                                .help("Oldest/smallest first instead of newest/largest"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace fields of an expense by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("subcategory").long("subcategory"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("payment").long("payment"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm").about("Delete an expense by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Spending overview for a period")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .value_parser(["today", "week", "month", "year", "all"])
                        .default_value("month"),
                ),
        )
        .subcommand(
            Command::new("analytics")
                .about("Monthly, category, and daily spending patterns")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Deep dive into one category"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses as csv, json, summary, or report")
                .arg(Arg::new("format").long("format").required(true))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output file; stdout when omitted"),
                )
                .arg(Arg::new("label").long("label").default_value("All Time")),
        )
        .subcommand(
            Command::new("import")
                .about("Import expenses from a previously exported CSV")
                .arg(Arg::new("path").long("file").required(true)),
        )
        .subcommand(
            Command::new("catalog")
                .about("Show the category and payment-mode catalog")
                .subcommand(Command::new("list").about("All categories with their subcategories"))
                .subcommand(
                    Command::new("subcategories")
                        .about("Subcategories for one category")
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(Command::new("modes").about("Payment modes")),
        )
}
