// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{MonthKey, RatedAspect};
use crate::utils::{get_setting, http_client, parse_date, set_setting};
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use serde::Deserialize;

const DEFAULT_BACKEND_URL: &str = "https://expensetrackerbackend-j2tz.onrender.com";

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().trim_end_matches('/');
            set_setting(conn, "backend_url", url)?;
            println!("Backend URL set to {}", url);
        }
        Some(("set-token", sub)) => {
            let token = sub.get_one::<String>("token").unwrap();
            set_setting(conn, "auth_token", token)?;
            println!("Auth token stored.");
        }
        Some(("pull", _)) => pull(conn)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct WireExpense {
    #[serde(rename = "_id")]
    id: String,
    amount: Decimal,
    category: String,
    #[serde(default)]
    reason: String,
    date: String,
}

#[derive(Debug, Deserialize)]
struct WireRated {
    rating: u8,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
struct WireJournal {
    #[serde(rename = "monthYear")]
    month_year: String,
    #[serde(default, rename = "monthHighlight")]
    month_highlight: String,
    #[serde(default, rename = "skillsLearnt")]
    skills_learnt: String,
    productivity: WireRated,
    health: WireRated,
    mood: WireRated,
}

/// Replace both local caches with whatever the backend currently holds.
fn pull(conn: &mut Connection) -> Result<()> {
    let base = get_setting(conn, "backend_url")?.unwrap_or_else(|| DEFAULT_BACKEND_URL.into());
    let token = get_setting(conn, "auth_token")?
        .ok_or_else(|| anyhow!("No auth token stored; run 'trackery sync set-token' first"))?;
    let client = http_client()?;

    let expenses: Vec<WireExpense> = client
        .get(format!("{}/api/expenses", base))
        .header("x-auth-token", &token)
        .send()?
        .error_for_status()?
        .json()
        .context("Malformed expense payload from backend")?;
    let journal: Vec<WireJournal> = client
        .get(format!("{}/api/journal", base))
        .header("x-auth-token", &token)
        .send()?
        .error_for_status()?
        .json()
        .context("Malformed journal payload from backend")?;

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM expenses", [])?;
    for e in &expenses {
        let date = parse_date(&e.date)
            .with_context(|| format!("Invalid date '{}' for expense {}", e.date, e.id))?;
        tx.execute(
            "INSERT INTO expenses(id, date, amount, category, reason) VALUES (?1,?2,?3,?4,?5)",
            params![
                e.id,
                date.to_string(),
                e.amount.to_string(),
                e.category,
                e.reason
            ],
        )?;
    }
    tx.execute("DELETE FROM journal", [])?;
    for j in &journal {
        let key = MonthKey::parse(&j.month_year)
            .with_context(|| format!("Invalid journal key '{}'", j.month_year))?;
        let productivity = RatedAspect::new(j.productivity.rating, j.productivity.note.clone())?;
        let health = RatedAspect::new(j.health.rating, j.health.note.clone())?;
        let mood = RatedAspect::new(j.mood.rating, j.mood.note.clone())?;
        tx.execute(
            "INSERT INTO journal(month_year, month_highlight, skills_learnt,
                                 productivity_rating, productivity_note,
                                 health_rating, health_note,
                                 mood_rating, mood_note)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
            params![
                key.to_string(),
                j.month_highlight,
                j.skills_learnt,
                productivity.rating,
                productivity.note,
                health.rating,
                health.note,
                mood.rating,
                mood.note
            ],
        )?;
    }
    tx.commit()?;
    println!(
        "Pulled {} expenses and {} journal entries from {}",
        expenses.len(),
        journal.len(),
        base
    );
    Ok(())
}
