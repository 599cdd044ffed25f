// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analytics::AnalyticsError;

/// A single recorded expense. Immutable once stored; rows are only ever
/// inserted or deleted, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub amount: Decimal,
    pub category: String,
    pub reason: String,
    pub date: NaiveDate,
}

/// Validated `YYYY-MM` composite key. At most one journal entry exists per
/// key; construction is the only place the pattern is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

static MONTH_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])$").unwrap());

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, AnalyticsError> {
        if !(1000..=9999).contains(&year) {
            return Err(AnalyticsError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(AnalyticsError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn parse(s: &str) -> Result<Self, AnalyticsError> {
        let caps = MONTH_KEY_RE
            .captures(s)
            .ok_or_else(|| AnalyticsError::InvalidMonthKey(s.to_string()))?;
        // The pattern guarantees both components parse.
        let year: i32 = caps[1].parse().unwrap_or_default();
        let month: u32 = caps[2].parse().unwrap_or_default();
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MonthKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Rating on a 1..=10 scale plus a free-text note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedAspect {
    pub rating: u8,
    pub note: String,
}

impl RatedAspect {
    pub fn new(rating: u8, note: impl Into<String>) -> Result<Self, AnalyticsError> {
        if !(1..=10).contains(&rating) {
            return Err(AnalyticsError::InvalidRating(rating));
        }
        Ok(Self {
            rating,
            note: note.into(),
        })
    }
}

/// One journal entry per calendar month: a highlight, skills learnt, and the
/// three tracked dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub month_year: MonthKey,
    pub month_highlight: String,
    pub skills_learnt: String,
    pub productivity: RatedAspect,
    pub health: RatedAspect,
    pub mood: RatedAspect,
}
