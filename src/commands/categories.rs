// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{categories_list, pretty_table, set_setting};
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let data = categories_list(conn)?
                .into_iter()
                .map(|c| vec![c])
                .collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("set", sub)) => {
            let names = sub.get_one::<String>("names").unwrap();
            let cleaned: Vec<&str> = names
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if cleaned.is_empty() {
                return Err(anyhow!("Category list cannot be empty"));
            }
            set_setting(conn, "categories", &cleaned.join(","))?;
            println!("Configured {} categories", cleaned.len());
        }
        _ => {}
    }
    Ok(())
}
