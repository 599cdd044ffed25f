// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use trackery::analytics::aggregate::CategoryTotal;
use trackery::analytics::breakdown::build;

fn totals(pairs: &[(&str, i64)]) -> Vec<CategoryTotal> {
    pairs
        .iter()
        .map(|(name, amount)| CategoryTotal {
            category: name.to_string(),
            amount: Decimal::from(*amount),
        })
        .collect()
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

#[test]
fn shares_sorted_descending_with_rounded_percentages() {
    let shares = build(
        &totals(&[("Travel", 50), ("Food", 300)]),
        &palette(&["#111111", "#222222"]),
    );
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "Food");
    assert_eq!(shares[0].amount, Decimal::from(300));
    assert_eq!(shares[0].percentage.to_string(), "85.7");
    assert_eq!(shares[1].name, "Travel");
    assert_eq!(shares[1].percentage.to_string(), "14.3");
}

#[test]
fn zero_grand_total_yields_empty_list() {
    assert!(build(&[], &palette(&["#111111"])).is_empty());
    assert!(build(&totals(&[("Food", 0), ("Travel", 0)]), &palette(&["#111111"])).is_empty());
}

#[test]
fn percentages_sum_to_one_hundred_within_tolerance() {
    let shares = build(
        &totals(&[("Food", 333), ("Travel", 333), ("Bills", 334), ("Leisure", 1)]),
        &palette(&["#111111"]),
    );
    let sum: Decimal = shares.iter().map(|s| s.percentage).sum();
    let tolerance = Decimal::new(1, 1) * Decimal::from(shares.len() as u64);
    assert!(
        (sum - Decimal::from(100)).abs() <= tolerance,
        "sum {} outside tolerance {}",
        sum,
        tolerance
    );
}

#[test]
fn equal_amounts_tie_break_by_name() {
    let shares = build(
        &totals(&[("Travel", 100), ("Food", 100), ("Bills", 100)]),
        &palette(&["#111111"]),
    );
    let names: Vec<&str> = shares.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bills", "Food", "Travel"]);
}

#[test]
fn colors_cycle_through_palette_by_sorted_position() {
    let shares = build(
        &totals(&[("A", 40), ("B", 30), ("C", 20), ("D", 10)]),
        &palette(&["#one", "#two", "#three"]),
    );
    let colors: Vec<&str> = shares.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["#one", "#two", "#three", "#one"]);
}

#[test]
fn empty_palette_leaves_colors_blank() {
    let shares = build(&totals(&[("Food", 10)]), &[]);
    assert_eq!(shares[0].color, "");
    assert_eq!(shares[0].percentage.to_string(), "100.0");
}
