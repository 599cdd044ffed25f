// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::JournalEntry;

/// Zero-filled 12-slot rating series, index 0 = January. A zero means "no
/// entry for that month"; real ratings are 1..=10.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RatingSeries {
    pub productivity: [u8; 12],
    pub health: [u8; 12],
    pub mood: [u8; 12],
}

/// Everything one year of journal data exposes for display: the entries by
/// month number and the chart-ready series.
#[derive(Debug, Clone, Default, Serialize)]
pub struct YearJournalView {
    pub months: BTreeMap<u32, JournalEntry>,
    pub series: RatingSeries,
}

/// Group entries by the year component of their month key. Entries carry
/// pre-validated `MonthKey`s, so no shape checking happens here.
pub fn organize(entries: &[JournalEntry]) -> BTreeMap<i32, YearJournalView> {
    let mut years: BTreeMap<i32, YearJournalView> = BTreeMap::new();
    for entry in entries {
        let view = years.entry(entry.month_year.year()).or_default();
        let month = entry.month_year.month();
        let idx = (month - 1) as usize;
        view.series.productivity[idx] = entry.productivity.rating;
        view.series.health[idx] = entry.health.rating;
        view.series.mood[idx] = entry.mood.rating;
        view.months.insert(month, entry.clone());
    }
    years
}

/// View for one specific year, empty (all-zero series, no months) when the
/// year has no entries.
pub fn year_view(entries: &[JournalEntry], year: i32) -> YearJournalView {
    organize(entries).remove(&year).unwrap_or_default()
}
