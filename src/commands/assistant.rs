// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ai::{Assistant, TextService};
use crate::store::TransactionStore;
use crate::utils::required;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle<S: TextService>(
    conn: &Connection,
    m: &clap::ArgMatches,
    assistant: &Assistant<S>,
) -> Result<()> {
    if let Some(text) = run(conn, m, assistant)? {
        println!("{}", text.trim_end());
    }
    Ok(())
}

/// Text to show for the chosen subcommand; `None` when nothing was asked.
pub fn run<S: TextService>(
    conn: &Connection,
    m: &clap::ArgMatches,
    assistant: &Assistant<S>,
) -> Result<Option<String>> {
    match m.subcommand() {
        Some(("advice", _)) => {
            let txs = TransactionStore::new(conn).list()?;
            Ok(Some(assistant.financial_advice(&txs)))
        }
        Some(("brief", sub)) => Ok(assistant.design_brief(required(sub, "topic")?)),
        _ => Ok(None),
    }
}
