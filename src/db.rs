// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::models::{NewTransaction, TxType};
use crate::store::{CategoryStore, TransactionStore};
use crate::utils::{get_setting, set_setting};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Studiobooks", "studiobooks"));

const DEFAULT_CATEGORIES: [(&str, TxType); 11] = [
    ("Pesanan Logo", TxType::Income),
    ("Desain Lainnya", TxType::Income),
    ("Percetakan", TxType::Income),
    ("Pemasukan Lainnya", TxType::Income),
    ("Biaya Iklan", TxType::Expense),
    ("Gaji Karyawan", TxType::Expense),
    ("Internet", TxType::Expense),
    ("Rumah Tangga", TxType::Expense),
    ("Konsumsi", TxType::Expense),
    ("Kontrakan", TxType::Expense),
    ("Maintenance", TxType::Expense),
];

// (date, amount, category, description, type)
const DEMO_TRANSACTIONS: [(&str, i64, &str, &str, TxType); 7] = [
    ("2024-05-01", 2_500_000, "Pesanan Logo", "Logo Project - Coffee Shop", TxType::Income),
    ("2024-05-02", 500_000, "Biaya Iklan", "Instagram Ads Promo Lebaran", TxType::Expense),
    ("2024-05-05", 1_500_000, "Desain Lainnya", "Desain Menu & Banner", TxType::Income),
    ("2024-05-10", 350_000, "Internet", "WiFi Bulanan IndiHome", TxType::Expense),
    ("2024-05-15", 4_500_000, "Gaji Karyawan", "Gaji Desainer Junior", TxType::Expense),
    ("2024-05-20", 500_000, "Konsumsi", "Snack & Kopi Meeting", TxType::Expense),
    ("2024-05-22", 3_000_000, "Percetakan", "Cetak Brosur Client A", TxType::Income),
];

pub fn db_path(cfg: &Config) -> Result<PathBuf> {
    if let Some(p) = &cfg.db_path {
        return Ok(p.clone());
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("studiobooks.sqlite"))
}

pub fn open_or_init(cfg: &Config) -> Result<Connection> {
    let path = db_path(cfg)?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "database ready");
    Ok(conn)
}

/// A fresh, fully initialized database that lives only as long as the connection.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Open in-memory DB")?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- no UNIQUE on name: duplicates are allowed
    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('INCOME','EXPENSE'))
    );

    -- category is a plain label, not a foreign key
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount INTEGER NOT NULL CHECK(amount BETWEEN 0 AND 1000000000000000),
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('INCOME','EXPENSE')),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    seed_categories(conn)?;
    Ok(())
}

// Runs once per database; later deletions must not bring the defaults back.
fn seed_categories(conn: &Connection) -> Result<()> {
    if get_setting(conn, "categories_seeded")?.is_some() {
        return Ok(());
    }
    let store = CategoryStore::new(conn);
    for (name, ty) in DEFAULT_CATEGORIES {
        store.add(name, ty)?;
    }
    set_setting(conn, "categories_seeded", "1")?;
    Ok(())
}

/// Loads the May 2024 sample ledger. Returns the number of rows added.
pub fn seed_demo(conn: &Connection) -> Result<usize> {
    let store = TransactionStore::new(conn);
    for (date, amount, category, description, ty) in DEMO_TRANSACTIONS {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        store.add(NewTransaction {
            date,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            r#type: ty,
        })?;
    }
    Ok(DEMO_TRANSACTIONS.len())
}
