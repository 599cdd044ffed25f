// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::{ExpenseRecord, JournalEntry, MonthKey, RatedAspect};

const UA: &str = concat!(
    "trackery/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/trackery)"
);

/// Category list the settings table is seeded with; matches the mobile app.
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "Food",
    "Groceries",
    "Travel",
    "Health",
    "Leisure",
    "Education",
    "Gadgets",
    "Bills",
    "Shopping",
    "Grooming",
    "Others",
    "Automobile",
];

/// Default breakdown palette, cycled by sorted position.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#A8DADC", "#457B9D", "#F4A261", "#E76F51", "#2A9D8F", "#E9C46A", "#F1FAEE", "#B5838D",
    "#81B29A", "#A3A1F7", "#FFB4A2", "#6D6875",
];

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parse a calendar date, tolerating both plain ISO dates and the RFC 3339
/// date-times the backend emits. Time-of-day is discarded.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD or RFC 3339", s))
}

pub fn parse_month(s: &str) -> Result<MonthKey> {
    MonthKey::parse(s).with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Settings
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn categories_list(conn: &Connection) -> Result<Vec<String>> {
    Ok(match get_setting(conn, "categories")? {
        Some(csv) => csv.split(',').map(|s| s.trim().to_string()).collect(),
        None => DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn palette(conn: &Connection) -> Result<Vec<String>> {
    Ok(match get_setting(conn, "palette")? {
        Some(csv) => csv.split(',').map(|s| s.trim().to_string()).collect(),
        None => DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn load_expenses(conn: &Connection) -> Result<Vec<ExpenseRecord>> {
    let mut stmt =
        conn.prepare("SELECT id, date, amount, category, reason FROM expenses ORDER BY date, id")?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let date_s: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let category: String = r.get(3)?;
        let reason: String = r.get(4)?;
        out.push(ExpenseRecord {
            date: parse_date(&date_s)
                .with_context(|| format!("Invalid date '{}' for expense {}", date_s, id))?,
            amount: parse_decimal(&amount_s)
                .with_context(|| format!("Invalid amount '{}' for expense {}", amount_s, id))?,
            id,
            category,
            reason,
        });
    }
    Ok(out)
}

pub fn load_journal(conn: &Connection) -> Result<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT month_year, month_highlight, skills_learnt,
                productivity_rating, productivity_note,
                health_rating, health_note,
                mood_rating, mood_note
         FROM journal ORDER BY month_year",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let key_s: String = r.get(0)?;
        let month_year = MonthKey::parse(&key_s)
            .with_context(|| format!("Invalid journal key '{}'", key_s))?;
        out.push(JournalEntry {
            month_year,
            month_highlight: r.get(1)?,
            skills_learnt: r.get(2)?,
            productivity: RatedAspect::new(r.get::<_, u8>(3)?, r.get::<_, String>(4)?)?,
            health: RatedAspect::new(r.get::<_, u8>(5)?, r.get::<_, String>(6)?)?,
            mood: RatedAspect::new(r.get::<_, u8>(7)?, r.get::<_, String>(8)?)?,
        });
    }
    Ok(out)
}
