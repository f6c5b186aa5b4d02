// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use studiobooks::ai::{Assistant, GeminiService};
use studiobooks::{cli, commands, config::Config, db, init_tracing};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    init_tracing(matches.get_flag("verbose"));

    let cfg = Config::from_env();
    let conn = db::open_or_init(&cfg)?;

    match matches.subcommand() {
        Some(("init", sub)) => {
            if sub.get_flag("demo") {
                let n = db::seed_demo(&conn)?;
                println!("Loaded {} sample transactions", n);
            }
            println!("Database initialized at {}", db::db_path(&cfg)?.display());
        }
        Some(("dashboard", sub)) => commands::dashboard::handle(&conn, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, sub)?,
        Some(("invoice", sub)) => commands::invoices::handle(&conn, sub)?,
        Some(("ai", sub)) => {
            let assistant = Assistant::new(GeminiService::from_config(&cfg)?);
            commands::assistant::handle(&conn, sub, &assistant)?
        }
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
