// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregate::CategoryTotal;

/// One slice of the share-of-total view driving pie-chart style displays.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub amount: Decimal,
    /// Share of the grand total, rounded to one decimal place.
    pub percentage: Decimal,
    pub color: String,
}

/// Convert per-category totals into shares sorted by amount descending,
/// ties by name ascending. Colors cycle through `palette` by sorted index.
///
/// A zero grand total (empty input or all-zero amounts) yields an empty list.
pub fn build(per_category_totals: &[CategoryTotal], palette: &[String]) -> Vec<CategoryShare> {
    let grand_total: Decimal = per_category_totals.iter().map(|ct| ct.amount).sum();
    if grand_total.is_zero() {
        return Vec::new();
    }

    let mut sorted: Vec<&CategoryTotal> = per_category_totals.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));

    let hundred = Decimal::from(100u32);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, ct)| {
            // Pin to one decimal place so whole-number shares render as e.g. 100.0
            let mut percentage = (ct.amount * hundred / grand_total).round_dp(1);
            percentage.rescale(1);
            CategoryShare {
                name: ct.category.clone(),
                amount: ct.amount,
                percentage,
                color: if palette.is_empty() {
                    String::new()
                } else {
                    palette[i % palette.len()].clone()
                },
            }
        })
        .collect()
}
