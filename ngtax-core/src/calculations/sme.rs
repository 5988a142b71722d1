//! SME Companies Income Tax estimate with tier description.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{non_negative, round_naira};
use crate::models::CitTierTable;

/// Result of an SME CIT estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmeResult {
    /// Estimated CIT payable in whole naira.
    pub cit: Decimal,
    /// Description of the tier that applied.
    pub note: String,
}

/// Estimates CIT for an SME with the tier's descriptive label.
///
/// Same tier math as [`crate::calculations::cit::calculate`]. The declared
/// `_assets` figure is collected by the intake form but plays no part in
/// the current tier schedule, which is keyed on turnover alone.
pub fn calculate(
    turnover: Decimal,
    _assets: Decimal,
    tiers: &CitTierTable,
) -> SmeResult {
    let turnover = non_negative(turnover);
    match tiers.tier_for(turnover) {
        Some(tier) => SmeResult {
            cit: round_naira(turnover * tier.rate),
            note: tier.label.clone(),
        },
        None => {
            warn!(tax_year = tiers.tax_year, "empty CIT tier table");
            SmeResult {
                cit: Decimal::ZERO,
                note: "No CIT tier configured".to_string(),
            }
        }
    }
}
