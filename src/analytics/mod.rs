// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure rollup computations over in-memory expense and journal collections.
//!
//! Nothing in here touches the database or the network; callers load records
//! first and hand them in. All functions are deterministic and safe to call
//! from concurrent contexts on independent inputs.

pub mod aggregate;
pub mod breakdown;
pub mod journal;
pub mod pipeline;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("invalid year {0}, expected a 4-digit year")]
    InvalidYear(i32),
    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
    #[error("invalid month key '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),
    #[error("invalid rating {0}, expected 1-10")]
    InvalidRating(u8),
}
