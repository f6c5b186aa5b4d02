// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction, TxType};
use crate::stats::filter_by_substring;
use crate::store::{CategoryStore, TransactionStore};
use crate::utils::{
    fmt_rupiah, maybe_print_json, parse_amount, parse_date, parse_tx_type, pretty_table, required,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use tracing::warn;

pub const UNCATEGORIZED: &str = "Uncategorized";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let t = add(conn, sub, Local::now().date_naive())?;
            println!(
                "Recorded {} {} on {} '{}' ({})",
                t.r#type,
                fmt_rupiah(t.amount),
                t.date,
                t.description,
                t.category
            );
        }
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Validates CLI input into a transaction and stores it. `today` fills a missing date.
pub fn add(conn: &Connection, sub: &clap::ArgMatches, today: NaiveDate) -> Result<Transaction> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today,
    };
    let amount = parse_amount(required(sub, "amount")?)?;
    let ty = parse_tx_type(required(sub, "type")?)?;
    let description = required(sub, "description")?.trim().to_string();
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    if category != UNCATEGORIZED {
        let offered = CategoryStore::new(conn).list_for(ty)?;
        if !offered.iter().any(|c| c.name == category) {
            warn!(category = %category, kind = %ty, "category is not offered for this type");
        }
    }

    TransactionStore::new(conn).add(NewTransaction {
        date,
        amount,
        category,
        description,
        r#type: ty,
    })
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    signed_amount(t),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn signed_amount(t: &Transaction) -> String {
    let sign = match t.r#type {
        TxType::Income => '+',
        TxType::Expense => '-',
    };
    format!("{} {}", sign, fmt_rupiah(t.amount))
}

/// Newest-first transactions after `--search` and `--limit`.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let all = TransactionStore::new(conn).list()?;
    let term = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let mut data = filter_by_substring(&all, term);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
