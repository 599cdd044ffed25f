// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Trackery", "trackery"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("trackery.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS expenses(
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        reason TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);

    -- One entry per calendar month; the key is the validated YYYY-MM form.
    CREATE TABLE IF NOT EXISTS journal(
        month_year TEXT PRIMARY KEY,
        month_highlight TEXT NOT NULL DEFAULT '',
        skills_learnt TEXT NOT NULL DEFAULT '',
        productivity_rating INTEGER NOT NULL,
        productivity_note TEXT NOT NULL DEFAULT '',
        health_rating INTEGER NOT NULL,
        health_note TEXT NOT NULL DEFAULT '',
        mood_rating INTEGER NOT NULL,
        mood_note TEXT NOT NULL DEFAULT ''
    );
    "#,
    )?;
    Ok(())
}
