// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;
use trackery::{cli, commands::importer, db, utils};

fn base_conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn run_import(conn: &mut Connection, path: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["trackery", "import", "expenses", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(conn, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn imports_valid_rows_and_loads_them_back() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,reason\n2024-01-05,100,Food,groceries run\n2024-02-10,200.50,Food,dinner\n2024-02-15,50,Travel,bus pass"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap()).unwrap();

    let records = utils::load_expenses(&conn).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].category, "Food");
    assert_eq!(records[0].reason, "groceries run");
    assert_eq!(records[1].amount.to_string(), "200.50");
    // ids are generated per batch and must be distinct
    let ids: std::collections::HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn unknown_category_aborts_the_whole_file() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,reason\n2024-01-05,100,Food,ok\n2024-01-06,10,NotACategory,bad"
    )
    .unwrap();
    file.flush().unwrap();

    assert!(run_import(&mut conn, file.path().to_str().unwrap()).is_err());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0, "failed import must not leave partial rows");
}

#[test]
fn negative_amount_is_rejected() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,amount,category,reason\n2024-01-05,-5,Food,refund").unwrap();
    file.flush().unwrap();

    assert!(run_import(&mut conn, file.path().to_str().unwrap()).is_err());
}

#[test]
fn respects_a_reconfigured_category_list() {
    let mut conn = base_conn();
    utils::set_setting(&conn, "categories", "Rent,Fun").unwrap();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,amount,category,reason\n2024-01-05,900,Rent,january\n2024-01-06,30,Fun,arcade"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap()).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);

    let mut file2 = NamedTempFile::new().unwrap();
    writeln!(file2, "date,amount,category,reason\n2024-01-07,12,Food,lunch").unwrap();
    file2.flush().unwrap();
    assert!(
        run_import(&mut conn, file2.path().to_str().unwrap()).is_err(),
        "defaults no longer apply once overridden"
    );
}
