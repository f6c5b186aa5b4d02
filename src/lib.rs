// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod invoice;
pub mod models;
pub mod stats;
pub mod store;
pub mod utils;

use tracing_subscriber::EnvFilter;

/// Logs to stderr; `RUST_LOG` wins over the `verbose` default.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "studiobooks=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
