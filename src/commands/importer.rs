// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{categories_list, parse_date, parse_decimal};
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use rusqlite::{params, Connection};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => import_expenses(conn, sub),
        _ => Ok(()),
    }
}

/// Expected header row: `date,amount,category,reason`. The whole file imports
/// in one transaction; any bad row aborts the lot.
fn import_expenses(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let known = categories_list(conn)?;
    let batch = chrono::Utc::now().timestamp_micros();
    let tx = conn.transaction()?;
    let mut count = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let amount_raw = rec.get(1).context("amount missing")?.trim();
        let category = rec.get(2).context("category missing")?.trim();
        let reason = rec.get(3).unwrap_or("").trim();

        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid date '{}' on row {}", date_raw, idx + 2))?;
        let amount = parse_decimal(amount_raw)
            .with_context(|| format!("Invalid amount '{}' on row {}", amount_raw, idx + 2))?;
        if amount.is_sign_negative() {
            return Err(anyhow!(
                "Negative amount '{}' on row {}",
                amount_raw,
                idx + 2
            ));
        }
        if !known.iter().any(|c| c == category) {
            return Err(anyhow!(
                "Unknown category '{}' on row {} (configured: {})",
                category,
                idx + 2,
                known.join(", ")
            ));
        }

        tx.execute(
            "INSERT INTO expenses(id, date, amount, category, reason) VALUES (?1,?2,?3,?4,?5)",
            params![
                format!("csv-{:x}-{}", batch, idx),
                date.to_string(),
                amount.to_string(),
                category,
                reason
            ],
        )?;
        count += 1;
    }
    tx.commit()?;
    println!("Imported {} expenses from {}", count, path);
    Ok(())
}
