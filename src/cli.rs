// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense", "INCOME", "EXPENSE"])
        .help("income or expense")
}

pub fn build_cli() -> Command {
    Command::new("studiobooks")
        .about("Bookkeeping, reports, invoices and AI drafts for design studios")
        .version(clap::crate_version!())
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(
            Command::new("init")
                .about("Create the database and seed default categories")
                .arg(
                    Arg::new("demo")
                        .long("demo")
                        .action(ArgAction::SetTrue)
                        .help("Also load the sample May 2024 transactions"),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Lifetime totals and chart series"),
        ))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_negative_numbers(true)
                                .help("Whole Rupiah, e.g. 2500000 or 2.500.000"),
                        )
                        .arg(type_arg().required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Case-insensitive match on description or category"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Reports and chart series")
                .subcommand(json_flags(
                    Command::new("monthly")
                        .about("Income, expense and net for one month")
                        .arg(Arg::new("month").long("month").help("1-12, defaults to this month"))
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32))
                                .help("Defaults to this year"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("by-month").about("Income/expense per month label"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Expense per category"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(type_arg().required(true)),
                )
                .subcommand(json_flags(Command::new("list").arg(type_arg())))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("invoice")
                .about("Render a printable invoice")
                .arg(Arg::new("client").long("client").required(true))
                .arg(Arg::new("address").long("address").default_value(""))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                .arg(Arg::new("due").long("due").help("Due date, YYYY-MM-DD"))
                .arg(Arg::new("notes").long("notes"))
                .arg(
                    Arg::new("item")
                        .long("item")
                        .action(ArgAction::Append)
                        .help("description=price[xqty], repeatable"),
                )
                .arg(Arg::new("out").long("out").help("Write to file instead of stdout")),
        )
        .subcommand(
            Command::new("ai")
                .about("AI-drafted text")
                .subcommand(Command::new("advice").about("Advice on the 20 latest transactions"))
                .subcommand(
                    Command::new("brief")
                        .about("Draft a design brief")
                        .arg(Arg::new("topic").long("topic").required(true)),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("Application settings")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").long("key").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                )
                .subcommand(Command::new("list")),
        )
}
