// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::invoice::{next_invoice_number, parse_item, render};
use crate::models::Invoice;
use crate::utils::{agency_name, fmt_rupiah_decimal, parse_date, required};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let invoice = build(conn, m, Local::now().date_naive())?;
    let text = render(&invoice, &agency_name(conn)?);
    match m.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, &text).with_context(|| format!("Write invoice to {}", out))?;
            println!(
                "Invoice {} ({}) written to {}",
                invoice.number,
                fmt_rupiah_decimal(&invoice.total()),
                out
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// Parses every item before a number is drawn, so bad input never burns one.
pub fn build(conn: &Connection, m: &clap::ArgMatches, today: NaiveDate) -> Result<Invoice> {
    let client_name = required(m, "client")?.trim().to_string();
    let items = m
        .get_many::<String>("item")
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, raw)| parse_item(i + 1, raw))
        .collect::<Result<Vec<_>>>()?;
    let date = match m.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today,
    };
    let due_date = m.get_one::<String>("due").map(|d| parse_date(d)).transpose()?;
    Ok(Invoice {
        number: next_invoice_number(conn)?,
        client_name,
        client_address: m
            .get_one::<String>("address")
            .cloned()
            .unwrap_or_default(),
        date,
        due_date,
        items,
        notes: m.get_one::<String>("notes").cloned(),
    })
}
