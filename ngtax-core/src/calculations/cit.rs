//! Companies Income Tax by turnover tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{non_negative, round_naira};
use crate::models::CitTierTable;

/// Result of a CIT quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitResult {
    /// CIT payable in whole naira.
    pub cit: Decimal,
}

/// Computes CIT on annual turnover.
///
/// The matching tier's flat rate applies to the whole turnover. An empty
/// tier table (which [`CitTierTable::validate`] would reject) yields zero
/// tax rather than an error.
pub fn calculate(
    turnover: Decimal,
    tiers: &CitTierTable,
) -> CitResult {
    let turnover = non_negative(turnover);
    let rate = match tiers.tier_for(turnover) {
        Some(tier) => tier.rate,
        None => {
            warn!(tax_year = tiers.tax_year, "empty CIT tier table");
            Decimal::ZERO
        }
    };

    CitResult {
        cit: round_naira(turnover * rate),
    }
}
