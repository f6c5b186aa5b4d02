// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryBucket, MonthBucket, ReportStats};
use crate::stats::{bucket_by_category, bucket_by_month, report_stats};
use crate::store::TransactionStore;
use crate::utils::{fmt_rupiah, maybe_print_json, month_name, parse_month, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("by-month", sub)) => by_month(conn, sub)?,
        Some(("by-category", sub)) => by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub month: u32, // zero-based
    pub year: i32,
    pub label: String,
    #[serde(flatten)]
    pub stats: ReportStats,
}

/// Report scope from `--month/--year`, falling back to `today`'s month and year.
pub fn monthly_report(
    conn: &Connection,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<MonthlyReport> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => today.month0(),
    };
    let year = sub.get_one::<i32>("year").copied().unwrap_or(today.year());
    let txs = TransactionStore::new(conn).list()?;
    Ok(MonthlyReport {
        month,
        year,
        label: format!("{} {}", month_name(month), year),
        stats: report_stats(&txs, month, year),
    })
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = monthly_report(conn, sub, Local::now().date_naive())?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let s = &report.stats;
        println!("Laporan {}", report.label);
        println!(
            "{}",
            pretty_table(
                &["Pemasukan", "Pengeluaran", "Laba Bersih", "Transaksi"],
                vec![vec![
                    fmt_rupiah(s.income),
                    fmt_rupiah(s.expense),
                    fmt_rupiah(s.net),
                    s.count.to_string(),
                ]],
            )
        );
    }
    Ok(())
}

fn by_month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let txs = TransactionStore::new(conn).list()?;
    let data = bucket_by_month(&txs);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", month_table(&data));
    }
    Ok(())
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let txs = TransactionStore::new(conn).list()?;
    let data = bucket_by_category(&txs);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("Belum ada data pengeluaran.");
        } else {
            println!("{}", category_table(&data));
        }
    }
    Ok(())
}

pub(crate) fn month_table(data: &[MonthBucket]) -> comfy_table::Table {
    let rows = data
        .iter()
        .map(|b| vec![b.label.clone(), fmt_rupiah(b.income), fmt_rupiah(b.expense)])
        .collect();
    pretty_table(&["Bulan", "Pemasukan", "Pengeluaran"], rows)
}

pub(crate) fn category_table(data: &[CategoryBucket]) -> comfy_table::Table {
    let rows = data
        .iter()
        .map(|b| vec![b.label.clone(), fmt_rupiah(b.value)])
        .collect();
    pretty_table(&["Kategori", "Pengeluaran"], rows)
}
