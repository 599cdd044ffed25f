// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::journal::{organize, year_view, YearJournalView};
use crate::models::RatedAspect;
use crate::utils::{load_journal, maybe_print_json, month_name, parse_month, pretty_table};
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("delete", sub)) => delete(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// `RATING[:note]`, rating 1-10.
fn parse_rated(s: &str) -> Result<RatedAspect> {
    let (rating_s, note) = match s.split_once(':') {
        Some((r, n)) => (r, n),
        None => (s, ""),
    };
    let rating: u8 = rating_s
        .trim()
        .parse()
        .with_context(|| format!("Invalid rating '{}', expected 1-10", rating_s))?;
    Ok(RatedAspect::new(rating, note.trim())?)
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let highlight = sub.get_one::<String>("highlight").unwrap();
    let skills = sub.get_one::<String>("skills").unwrap();
    let productivity = parse_rated(sub.get_one::<String>("productivity").unwrap())?;
    let health = parse_rated(sub.get_one::<String>("health").unwrap())?;
    let mood = parse_rated(sub.get_one::<String>("mood").unwrap())?;

    conn.execute(
        "INSERT INTO journal(month_year, month_highlight, skills_learnt,
                             productivity_rating, productivity_note,
                             health_rating, health_note,
                             mood_rating, mood_note)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)
         ON CONFLICT(month_year) DO UPDATE SET
             month_highlight=excluded.month_highlight,
             skills_learnt=excluded.skills_learnt,
             productivity_rating=excluded.productivity_rating,
             productivity_note=excluded.productivity_note,
             health_rating=excluded.health_rating,
             health_note=excluded.health_note,
             mood_rating=excluded.mood_rating,
             mood_note=excluded.mood_note",
        params![
            month.to_string(),
            highlight,
            skills,
            productivity.rating,
            productivity.note,
            health.rating,
            health.note,
            mood.rating,
            mood.note
        ],
    )?;
    println!("Journal entry saved for {}", month);
    Ok(())
}

fn print_year(year: i32, view: &YearJournalView) {
    let rows: Vec<Vec<String>> = view
        .months
        .iter()
        .map(|(month, e)| {
            vec![
                format!("{} {}", month_name(*month), year),
                e.month_highlight.clone(),
                e.skills_learnt.clone(),
                e.productivity.rating.to_string(),
                e.health.rating.to_string(),
                e.mood.rating.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Highlight", "Skills", "Productivity", "Health", "Mood"],
            rows
        )
    );

    let mut headers = vec!["Series"];
    headers.extend((1..=12).map(month_name));
    let series_rows: Vec<Vec<String>> = [
        ("productivity", &view.series.productivity),
        ("health", &view.series.health),
        ("mood", &view.series.mood),
    ]
    .iter()
    .map(|(name, series)| {
        let mut row = vec![name.to_string()];
        row.extend(series.iter().map(|v| v.to_string()));
        row
    })
    .collect();
    println!("{}", pretty_table(&headers, series_rows));
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = load_journal(conn)?;

    if let Some(year) = sub.get_one::<i32>("year") {
        let view = year_view(&entries, *year);
        if !maybe_print_json(json_flag, jsonl_flag, &view)? {
            print_year(*year, &view);
        }
        return Ok(());
    }

    let years = organize(&entries);
    if !maybe_print_json(json_flag, jsonl_flag, &years)? {
        for (year, view) in &years {
            println!("Year {}", year);
            print_year(*year, view);
        }
    }
    Ok(())
}

fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let n = conn.execute(
        "DELETE FROM journal WHERE month_year=?1",
        params![month.to_string()],
    )?;
    if n == 0 {
        return Err(anyhow!("No journal entry for {}", month));
    }
    println!("Deleted journal entry for {}", month);
    Ok(())
}
