// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Stores owning the transaction and category collections.
//!
//! Reads hand back owned snapshots, so nothing downstream ever observes a
//! collection while it is being written.

use crate::models::{Category, NewTransaction, Transaction, TxType};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use tracing::debug;

pub struct TransactionStore<'a> {
    conn: &'a Connection,
}

impl<'a> TransactionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All transactions, most recently added first.
    pub fn list(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, description, type
             FROM transactions ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, NaiveDate>(1)?,
                r.get::<_, i64>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, date, amount, category, description, ty) = row?;
            let r#type = ty
                .parse::<TxType>()
                .with_context(|| format!("Transaction {} has invalid type", id))?;
            out.push(Transaction {
                id,
                date,
                amount,
                category,
                description,
                r#type,
            });
        }
        Ok(out)
    }

    pub fn add(&self, tx: NewTransaction) -> Result<Transaction> {
        self.conn
            .execute(
                "INSERT INTO transactions(date, amount, category, description, type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    tx.date.to_string(),
                    tx.amount,
                    tx.category,
                    tx.description,
                    tx.r#type.as_str()
                ],
            )
            .with_context(|| format!("Insert transaction '{}'", tx.description))?;
        let id = self.conn.last_insert_rowid();
        debug!(id, amount = tx.amount, kind = %tx.r#type, "transaction added");
        Ok(tx.with_id(id))
    }
}

pub struct CategoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All categories in creation order.
    pub fn list(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, name, ty) = row?;
            let r#type = ty
                .parse::<TxType>()
                .with_context(|| format!("Category '{}' has invalid type", name))?;
            out.push(Category { id, name, r#type });
        }
        Ok(out)
    }

    /// Categories offered when entering a transaction of `ty`.
    pub fn list_for(&self, ty: TxType) -> Result<Vec<Category>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|c| c.r#type == ty)
            .collect())
    }

    pub fn add(&self, name: &str, ty: TxType) -> Result<Category> {
        self.conn
            .execute(
                "INSERT INTO categories(name, type) VALUES (?1, ?2)",
                params![name, ty.as_str()],
            )
            .with_context(|| format!("Insert category '{}'", name))?;
        let id = self.conn.last_insert_rowid();
        debug!(id, category = name, "category added");
        Ok(Category {
            id,
            name: name.to_string(),
            r#type: ty,
        })
    }

    /// Removes a category by id. Unknown ids are ignored; transactions keep
    /// their label either way. Returns whether a row was deleted.
    pub fn remove(&self, id: i64) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM categories WHERE id=?1", params![id])?;
        debug!(id, removed = n > 0, "category remove");
        Ok(n > 0)
    }
}
