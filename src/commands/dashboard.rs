// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::reports::{category_table, month_table};
use crate::models::{CategoryBucket, DashboardStats, MonthBucket};
use crate::stats::{bucket_by_category, bucket_by_month, dashboard_stats};
use crate::store::TransactionStore;
use crate::utils::{fmt_rupiah, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub by_month: Vec<MonthBucket>,
    pub by_category: Vec<CategoryBucket>,
}

pub fn build(conn: &Connection) -> Result<Dashboard> {
    let txs = TransactionStore::new(conn).list()?;
    Ok(Dashboard {
        stats: dashboard_stats(&txs),
        by_month: bucket_by_month(&txs),
        by_category: bucket_by_category(&txs),
    })
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let dash = build(conn)?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &dash)? {
        return Ok(());
    }
    let s = &dash.stats;
    println!(
        "{}",
        pretty_table(
            &["Total Saldo", "Pemasukan", "Pengeluaran"],
            vec![vec![
                fmt_rupiah(s.total_balance),
                fmt_rupiah(s.total_income),
                fmt_rupiah(s.total_expense),
            ]],
        )
    );
    println!("Arus kas per bulan");
    println!("{}", month_table(&dash.by_month));
    println!("Pengeluaran per kategori");
    if dash.by_category.is_empty() {
        println!("Belum ada data pengeluaran.");
    } else {
        println!("{}", category_table(&dash.by_category));
    }
    Ok(())
}
