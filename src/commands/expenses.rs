// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::pipeline::{self, FilterSpec, SortField, SortOrder, SortSpec};
use crate::utils::{
    categories_list, load_expenses, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection};
use std::collections::HashSet;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        return Err(anyhow!("Amount must be non-negative, got {}", amount));
    }
    let category = sub.get_one::<String>("category").unwrap();
    let reason = sub.get_one::<String>("reason").unwrap();

    let known = categories_list(conn)?;
    if !known.iter().any(|c| c == category) {
        return Err(anyhow!(
            "Unknown category '{}' (configured: {})",
            category,
            known.join(", ")
        ));
    }

    let id = format!("loc-{:x}", chrono::Utc::now().timestamp_micros());
    conn.execute(
        "INSERT INTO expenses(id, date, amount, category, reason) VALUES (?1,?2,?3,?4,?5)",
        params![id, date.to_string(), amount.to_string(), category, reason],
    )?;
    println!("Recorded {} on {} for '{}' ({})", amount, date, reason, id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let categories: Option<HashSet<String>> = sub
        .get_many::<String>("category")
        .map(|vals| vals.cloned().collect());
    let filter = FilterSpec {
        categories,
        min_amount: sub
            .get_one::<String>("min")
            .map(|s| parse_decimal(s))
            .transpose()?,
        max_amount: sub
            .get_one::<String>("max")
            .map(|s| parse_decimal(s))
            .transpose()?,
        start_date: sub
            .get_one::<String>("from")
            .map(|s| parse_date(s))
            .transpose()?,
        end_date: sub
            .get_one::<String>("to")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    let sort = SortSpec {
        field: match sub.get_one::<String>("sort").map(String::as_str) {
            Some("amount") => SortField::Amount,
            _ => SortField::Date,
        },
        order: match sub.get_one::<String>("order").map(String::as_str) {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        },
    };

    let records = load_expenses(conn)?;
    let shown = pipeline::apply(&records, &filter, &sort);

    if !maybe_print_json(json_flag, jsonl_flag, &shown)? {
        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    format!("{:.2}", e.amount),
                    e.category.clone(),
                    e.reason.clone(),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Amount", "Category", "Reason", "ID"], rows)
        );
    }
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    if n == 0 {
        return Err(anyhow!("Expense '{}' not found", id));
    }
    println!("Deleted expense {}", id);
    Ok(())
}
