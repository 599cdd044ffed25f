// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use super::AnalyticsError;
use crate::models::ExpenseRecord;
use crate::utils::days_in_month;

/// Per-category sum. Kept as an ordered list rather than a map: the order is
/// first occurrence in the filtered record stream, and the top-category
/// tie-break relies on it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub total: Decimal,
    /// Index 0 = January. Months with no matching record stay at zero.
    pub per_month_totals: [Decimal; 12],
    /// Present only when a month was requested; one slot per calendar day.
    pub per_day_totals: Option<Vec<Decimal>>,
    pub per_category_totals: Vec<CategoryTotal>,
    /// Total divided by the number of active months, zero when none.
    pub average_monthly: Decimal,
    pub top_category: Option<String>,
    pub active_month_count: usize,
}

/// Roll up `records` for `year`, optionally narrowed to a single `month`.
///
/// Records outside the period are ignored. Empty input is not an error; every
/// field comes back zeroed or empty.
pub fn aggregate(
    records: &[ExpenseRecord],
    year: i32,
    month: Option<u32>,
) -> Result<AggregateResult, AnalyticsError> {
    if !(1000..=9999).contains(&year) {
        return Err(AnalyticsError::InvalidYear(year));
    }
    if let Some(m) = month {
        if !(1..=12).contains(&m) {
            return Err(AnalyticsError::InvalidMonth(m));
        }
    }

    let mut total = Decimal::ZERO;
    let mut per_month_totals = [Decimal::ZERO; 12];
    let mut per_day_totals = month.map(|m| vec![Decimal::ZERO; days_in_month(year, m) as usize]);
    let mut per_category_totals: Vec<CategoryTotal> = Vec::new();

    for rec in records {
        if rec.date.year() != year {
            continue;
        }
        let rec_month = rec.date.month();
        if let Some(m) = month {
            if rec_month != m {
                continue;
            }
        }

        total += rec.amount;
        per_month_totals[(rec_month - 1) as usize] += rec.amount;
        if let Some(ref mut days) = per_day_totals {
            days[(rec.date.day() - 1) as usize] += rec.amount;
        }
        match per_category_totals
            .iter_mut()
            .find(|ct| ct.category == rec.category)
        {
            Some(ct) => ct.amount += rec.amount,
            None => per_category_totals.push(CategoryTotal {
                category: rec.category.clone(),
                amount: rec.amount,
            }),
        }
    }

    let active_month_count = per_month_totals
        .iter()
        .filter(|amt| !amt.is_zero())
        .count();
    let average_monthly = if active_month_count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(active_month_count as u64)
    };

    // First category to reach the maximum wins; per_category_totals is in
    // first-occurrence order, so ties resolve to the earliest-seen category.
    let mut top: Option<&CategoryTotal> = None;
    for ct in &per_category_totals {
        if top.is_none_or(|best| ct.amount > best.amount) {
            top = Some(ct);
        }
    }
    let top_category = top.map(|ct| ct.category.clone());

    Ok(AggregateResult {
        total,
        per_month_totals,
        per_day_totals,
        per_category_totals,
        average_monthly,
        top_category,
        active_month_count,
    })
}
