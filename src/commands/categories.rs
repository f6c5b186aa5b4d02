// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::CategoryStore;
use crate::utils::{maybe_print_json, parse_tx_type, pretty_table, required, required_as};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let store = CategoryStore::new(conn);
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?.trim();
            if name.is_empty() {
                bail!("Category name must not be empty");
            }
            let ty = parse_tx_type(required(sub, "type")?)?;
            let c = store.add(name, ty)?;
            println!("Added category '{}' ({}) with id {}", c.name, c.r#type, c.id);
        }
        Some(("list", sub)) => {
            let data = match sub.get_one::<String>("type") {
                Some(t) => store.list_for(parse_tx_type(t)?)?,
                None => store.list()?,
            };
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .into_iter()
                    .map(|c| vec![c.id.to_string(), c.name, c.r#type.to_string()])
                    .collect();
                println!("{}", pretty_table(&["ID", "Category", "Type"], rows));
            }
        }
        Some(("rm", sub)) => {
            let id = *required_as::<i64>(sub, "id")?;
            if store.remove(id)? {
                println!("Removed category {}", id);
            } else {
                println!("No category with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}
