// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection};
use trackery::{cli, commands::exporter, db};

fn seeded_conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    for (id, date, amount, category, reason) in [
        ("e1", "2024-01-05", "100", "Food", "groceries"),
        ("e2", "2024-02-10", "200", "Food", "dinner"),
        ("e3", "2024-02-15", "50", "Travel", "bus"),
    ] {
        conn.execute(
            "INSERT INTO expenses(id, date, amount, category, reason) VALUES (?1,?2,?3,?4,?5)",
            params![id, date, amount, category, reason],
        )
        .unwrap();
    }
    conn
}

fn run_export(conn: &Connection, args: &[&str]) {
    let mut argv = vec!["trackery", "export"];
    argv.extend_from_slice(args);
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn exports_expenses_as_csv() {
    let conn = seeded_conn();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("expenses.csv");

    run_export(
        &conn,
        &["expenses", "--format", "csv", "--out", out.to_str().unwrap()],
    );

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("id,date,amount,category,reason"));
    assert_eq!(lines.clone().count(), 3);
    assert!(contents.contains("e2,2024-02-10,200,Food,dinner"));
}

#[test]
fn exports_expenses_as_json() {
    let conn = seeded_conn();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("expenses.json");

    run_export(
        &conn,
        &["expenses", "--format", "json", "--out", out.to_str().unwrap()],
    );

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["id"], "e1");
    assert_eq!(arr[0]["category"], "Food");
}

#[test]
fn insights_export_carries_aggregate_and_breakdown() {
    let conn = seeded_conn();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("insights.json");

    run_export(&conn, &["insights", "2024", "--out", out.to_str().unwrap()]);

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed["year"], 2024);
    assert_eq!(parsed["aggregate"]["total"], "350");
    assert_eq!(parsed["aggregate"]["active_month_count"], 2);
    assert_eq!(parsed["aggregate"]["top_category"], "Food");

    let breakdown = parsed["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0]["name"], "Food");
    assert_eq!(breakdown[0]["percentage"], "85.7");
    // colors come from the default palette, cycled by sorted position
    assert_eq!(breakdown[0]["color"], "#A8DADC");
    assert_eq!(breakdown[1]["color"], "#457B9D");
}
