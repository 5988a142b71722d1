//! Value-Added Tax on goods and services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{non_negative, round_naira};

/// Result of a VAT quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    /// VAT due in whole naira.
    pub vat: Decimal,
    /// Which treatment applied.
    pub note: String,
}

/// Computes VAT on `amount` at `rate_percent` (e.g. 7.5 for 7.5%).
///
/// Zero-rated supplies attract no VAT regardless of rate. Negative amounts
/// and rates are clamped to zero rather than rejected.
pub fn calculate(
    amount: Decimal,
    rate_percent: Decimal,
    zero_rated: bool,
) -> VatResult {
    if zero_rated {
        return VatResult {
            vat: Decimal::ZERO,
            note: "Zero-rated (no VAT charged)".to_string(),
        };
    }

    let amount = non_negative(amount);
    let rate_percent = non_negative(rate_percent);

    VatResult {
        vat: round_naira(amount * rate_percent / Decimal::ONE_HUNDRED),
        note: "Standard VAT applied".to_string(),
    }
}
