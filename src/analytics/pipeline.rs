// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::models::ExpenseRecord;

/// Display-subset predicates, AND-combined. An absent field places no
/// constraint on that dimension; bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub categories: Option<HashSet<String>>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            order: SortOrder::Asc,
        }
    }
}

fn keep(rec: &ExpenseRecord, filter: &FilterSpec) -> bool {
    if let Some(cats) = &filter.categories {
        if !cats.contains(&rec.category) {
            return false;
        }
    }
    if let Some(min) = filter.min_amount {
        if rec.amount < min {
            return false;
        }
    }
    if let Some(max) = filter.max_amount {
        if rec.amount > max {
            return false;
        }
    }
    if let Some(start) = filter.start_date {
        if rec.date < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if rec.date > end {
            return false;
        }
    }
    true
}

/// Filter then sort into a fresh vector. The input is never mutated, and the
/// sort is stable: descending order reverses the comparator rather than the
/// result, so equal keys keep their input order either way.
pub fn apply(records: &[ExpenseRecord], filter: &FilterSpec, sort: &SortSpec) -> Vec<ExpenseRecord> {
    let mut out: Vec<ExpenseRecord> = records
        .iter()
        .filter(|rec| keep(rec, filter))
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ord = match sort.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
        };
        match sort.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    out
}
