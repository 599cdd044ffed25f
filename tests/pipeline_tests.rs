// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;
use trackery::analytics::pipeline::{apply, FilterSpec, SortField, SortOrder, SortSpec};
use trackery::models::ExpenseRecord;

fn rec(id: &str, amount: i64, category: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: id.to_string(),
        amount: Decimal::from(amount),
        category: category.to_string(),
        reason: String::new(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

fn sample() -> Vec<ExpenseRecord> {
    vec![
        rec("a", 100, "Food", "2024-01-05"),
        rec("b", 200, "Food", "2024-02-10"),
        rec("c", 50, "Travel", "2024-02-15"),
    ]
}

fn ids(records: &[ExpenseRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn min_amount_filter_with_descending_amount_sort() {
    let out = apply(
        &sample(),
        &FilterSpec {
            min_amount: Some(Decimal::from(100)),
            ..Default::default()
        },
        &SortSpec {
            field: SortField::Amount,
            order: SortOrder::Desc,
        },
    );
    assert_eq!(ids(&out), vec!["b", "a"]);
    assert_eq!(out[0].amount, Decimal::from(200));
}

#[test]
fn filters_combine_with_and() {
    let mut categories = HashSet::new();
    categories.insert("Food".to_string());
    let out = apply(
        &sample(),
        &FilterSpec {
            categories: Some(categories),
            max_amount: Some(Decimal::from(150)),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Default::default()
        },
        &SortSpec::default(),
    );
    assert_eq!(ids(&out), vec!["a"]);
}

#[test]
fn date_bounds_are_inclusive_at_day_granularity() {
    let out = apply(
        &sample(),
        &FilterSpec {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 10),
            ..Default::default()
        },
        &SortSpec::default(),
    );
    assert_eq!(ids(&out), vec!["a", "b"]);
}

#[test]
fn empty_filter_keeps_everything() {
    let out = apply(&sample(), &FilterSpec::default(), &SortSpec::default());
    assert_eq!(out.len(), 3);
}

#[test]
fn input_is_never_mutated() {
    let records = sample();
    let before = ids(&records)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    let _ = apply(
        &records,
        &FilterSpec {
            min_amount: Some(Decimal::from(100)),
            ..Default::default()
        },
        &SortSpec {
            field: SortField::Amount,
            order: SortOrder::Desc,
        },
    );
    assert_eq!(ids(&records), before);
    assert_eq!(records.len(), 3);
}

#[test]
fn applying_twice_equals_applying_once() {
    let filter = FilterSpec {
        min_amount: Some(Decimal::from(60)),
        ..Default::default()
    };
    let sort = SortSpec {
        field: SortField::Date,
        order: SortOrder::Desc,
    };
    let once = apply(&sample(), &filter, &sort);
    let twice = apply(&once, &filter, &sort);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_orders() {
    let records = vec![
        rec("first", 100, "Food", "2024-03-01"),
        rec("second", 100, "Travel", "2024-03-01"),
        rec("third", 100, "Bills", "2024-03-01"),
    ];
    for order in [SortOrder::Asc, SortOrder::Desc] {
        for field in [SortField::Date, SortField::Amount] {
            let out = apply(
                &records,
                &FilterSpec::default(),
                &SortSpec { field, order },
            );
            assert_eq!(
                ids(&out),
                vec!["first", "second", "third"],
                "equal keys must keep input order"
            );
        }
    }
}
