// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("trackery")
        .version(crate_version!())
        .about("Expense tracking, spending insights, and monthly journal")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("expense")
                .about("Record, list, and delete expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("reason").long("reason").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, optionally filtered and sorted")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .action(ArgAction::Append)
                                .help("Keep only these categories (repeatable)"),
                        )
                        .arg(Arg::new("min").long("min").help("Minimum amount, inclusive"))
                        .arg(Arg::new("max").long("max").help("Maximum amount, inclusive"))
                        .arg(Arg::new("from").long("from").help("Earliest date, inclusive"))
                        .arg(Arg::new("to").long("to").help("Latest date, inclusive"))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["date", "amount"])
                                .default_value("date"),
                        )
                        .arg(
                            Arg::new("order")
                                .long("order")
                                .value_parser(["asc", "desc"])
                                .default_value("asc"),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete an expense permanently")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("journal")
                .about("Monthly mood/productivity/health journal")
                .subcommand(
                    Command::new("set")
                        .about("Create or replace the entry for a month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(Arg::new("highlight").long("highlight").default_value(""))
                        .arg(Arg::new("skills").long("skills").default_value(""))
                        .arg(
                            Arg::new("productivity")
                                .long("productivity")
                                .required(true)
                                .help("RATING[:note], rating 1-10"),
                        )
                        .arg(
                            Arg::new("health")
                                .long("health")
                                .required(true)
                                .help("RATING[:note], rating 1-10"),
                        )
                        .arg(
                            Arg::new("mood")
                                .long("mood")
                                .required(true)
                                .help("RATING[:note], rating 1-10"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("Show entries and rating series, grouped by year")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete the entry for a month")
                        .arg(Arg::new("month").required(true).help("YYYY-MM")),
                ),
        )
        .subcommand(
            Command::new("insights")
                .about("Aggregated spending views")
                .subcommand(json_flags(
                    Command::new("year")
                        .about("Year rollup: totals, averages, top category")
                        .arg(
                            Arg::new("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Month rollup with per-day totals")
                        .arg(Arg::new("month").required(true).help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("breakdown")
                        .about("Category share-of-total for a year or month")
                        .arg(
                            Arg::new("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("years").about("Total spend per year across all records"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Configured expense categories")
                .subcommand(Command::new("list").about("Show the configured category list"))
                .subcommand(
                    Command::new("set")
                        .about("Replace the category list")
                        .arg(
                            Arg::new("names")
                                .required(true)
                                .help("Comma-separated category names"),
                        ),
                ),
        )
        .subcommand(
            Command::new("sync")
                .about("Pull expenses and journal from the backend")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the backend base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-token")
                        .about("Store the backend auth token")
                        .arg(Arg::new("token").required(true)),
                )
                .subcommand(Command::new("pull").about("Replace local data with the backend's")),
        )
        .subcommand(
            Command::new("import")
                .about("Import records from files")
                .subcommand(
                    Command::new("expenses")
                        .about("Import expenses from a CSV file")
                        .arg(Arg::new("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export records and insights")
                .subcommand(
                    Command::new("expenses")
                        .about("Export all expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("insights")
                        .about("Export a year's aggregate and breakdown as JSON")
                        .arg(
                            Arg::new("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check local data for inconsistencies"))
}
