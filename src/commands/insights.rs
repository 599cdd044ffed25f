// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::aggregate::{aggregate, AggregateResult};
use crate::analytics::breakdown;
use crate::utils::{
    load_expenses, maybe_print_json, month_name, palette, parse_month, pretty_table,
};
use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("year", sub)) => year(conn, sub)?,
        Some(("month", sub)) => month(conn, sub)?,
        Some(("breakdown", sub)) => breakdown_cmd(conn, sub)?,
        Some(("years", sub)) => years(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn print_stats(result: &AggregateResult) {
    let rows = vec![
        vec!["Total".to_string(), format!("{:.2}", result.total)],
        vec![
            "Average Monthly".to_string(),
            format!("{:.2}", result.average_monthly),
        ],
        vec![
            "Top Category".to_string(),
            result.top_category.clone().unwrap_or_default(),
        ],
        vec![
            "Active Months".to_string(),
            result.active_month_count.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Stat", "Value"], rows));
}

fn year(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();

    let records = load_expenses(conn)?;
    let result = aggregate(&records, year, None)?;

    if !maybe_print_json(json_flag, jsonl_flag, &result)? {
        print_stats(&result);
        let rows: Vec<Vec<String>> = result
            .per_month_totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                vec![
                    format!("{} {}", month_name(i as u32 + 1), year),
                    format!("{:.2}", total),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Total"], rows));
    }
    Ok(())
}

fn month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let key = parse_month(sub.get_one::<String>("month").unwrap())?;

    let records = load_expenses(conn)?;
    let result = aggregate(&records, key.year(), Some(key.month()))?;

    if !maybe_print_json(json_flag, jsonl_flag, &result)? {
        println!("{}: {:.2} total", key, result.total);
        if let Some(days) = &result.per_day_totals {
            let rows: Vec<Vec<String>> = days
                .iter()
                .enumerate()
                .map(|(i, total)| vec![(i + 1).to_string(), format!("{:.2}", total)])
                .collect();
            println!("{}", pretty_table(&["Day", "Total"], rows));
        }
    }
    Ok(())
}

fn breakdown_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();
    let month = sub.get_one::<u32>("month").copied();

    let records = load_expenses(conn)?;
    let result = aggregate(&records, year, month)?;
    let shares = breakdown::build(&result.per_category_totals, &palette(conn)?);

    if !maybe_print_json(json_flag, jsonl_flag, &shares)? {
        let rows: Vec<Vec<String>> = shares
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    format!("{:.2}", s.amount),
                    format!("{}%", s.percentage),
                    s.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share", "Color"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct YearTotal {
    year: i32,
    total: Decimal,
}

fn years(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let records = load_expenses(conn)?;
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for rec in &records {
        *totals.entry(rec.date.year()).or_insert(Decimal::ZERO) += rec.amount;
    }
    let data: Vec<YearTotal> = totals
        .into_iter()
        .map(|(year, total)| YearTotal { year, total })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|yt| vec![yt.year.to_string(), format!("{:.2}", yt.total)])
            .collect();
        println!("{}", pretty_table(&["Year", "Total"], rows));
    }
    Ok(())
}
