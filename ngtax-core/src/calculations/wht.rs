//! Withholding tax deducted at source on specified payment types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{non_negative, round_naira};
use crate::models::{WhtCategory, WhtSchedule};

/// Result of a WHT quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhtResult {
    /// WHT due in whole naira.
    pub wht: Decimal,
    /// The rate applied, in percent.
    pub rate_percent: Decimal,
}

/// Computes WHT on `amount` for a payment category given as free text.
///
/// Unrecognized categories fall back to the schedule's default rate so a
/// quote is always produced.
pub fn calculate(
    amount: Decimal,
    category: &str,
    schedule: &WhtSchedule,
) -> WhtResult {
    let parsed = WhtCategory::parse(category);
    if parsed.is_none() {
        debug!(category, "unknown WHT category, using default rate");
    }
    let rate = schedule.rate_for(parsed);

    WhtResult {
        wht: round_naira(non_negative(amount) * rate),
        rate_percent: rate * Decimal::ONE_HUNDRED,
    }
}
