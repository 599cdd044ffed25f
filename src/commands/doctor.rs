// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::MonthKey;
use crate::utils::{categories_list, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Expenses outside the configured category list
    let known = categories_list(conn)?;
    let mut stmt = conn.prepare("SELECT id, category FROM expenses ORDER BY date")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        let cat: String = r.get(1)?;
        if !known.iter().any(|c| c == &cat) {
            rows.push(vec!["unknown_category".into(), format!("{} ({})", id, cat)]);
        }
    }

    // 2) Rows that won't survive a reload: bad dates, amounts, journal keys
    let mut stmt2 = conn.prepare("SELECT id, date, amount FROM expenses")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: String = r.get(0)?;
        let d: String = r.get(1)?;
        let amt: String = r.get(2)?;
        if parse_date(&d).is_err() {
            rows.push(vec!["bad_date".into(), format!("{} ({})", id, d)]);
        }
        match parse_decimal(&amt) {
            Ok(v) if !v.is_sign_negative() => {}
            _ => rows.push(vec!["bad_amount".into(), format!("{} ({})", id, amt)]),
        }
    }
    let mut stmt3 = conn.prepare("SELECT month_year FROM journal")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let key: String = r.get(0)?;
        if MonthKey::parse(&key).is_err() {
            rows.push(vec!["bad_journal_key".into(), key]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
