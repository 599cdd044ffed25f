// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::aggregate::aggregate;
use crate::analytics::breakdown;
use crate::utils::{load_expenses, palette};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(conn, sub),
        Some(("insights", sub)) => export_insights(conn, sub),
        _ => Ok(()),
    }
}

fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let records = load_expenses(conn)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "amount", "category", "reason"])?;
            for e in &records {
                wtr.write_record([
                    e.id.clone(),
                    e.date.to_string(),
                    e.amount.to_string(),
                    e.category.clone(),
                    e.reason.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&records)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} expenses to {}", records.len(), out);
    Ok(())
}

/// The CLI stand-in for the mobile app's report export: one JSON document
/// with the year aggregate and its category breakdown.
fn export_insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let year = *sub.get_one::<i32>("year").unwrap();
    let out = sub.get_one::<String>("out").unwrap();

    let records = load_expenses(conn)?;
    let result = aggregate(&records, year, None)?;
    let shares = breakdown::build(&result.per_category_totals, &palette(conn)?);

    let doc = json!({
        "year": year,
        "aggregate": result,
        "breakdown": shares,
    });
    std::fs::write(out, serde_json::to_string_pretty(&doc)?)?;
    println!("Exported {} insights to {}", year, out);
    Ok(())
}
