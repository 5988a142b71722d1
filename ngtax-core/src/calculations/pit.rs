//! Flat-rate Personal Income Tax.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{non_negative, round_naira};

/// Result of a PIT quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitResult {
    /// PIT payable in whole naira.
    pub pit: Decimal,
}

/// Computes flat-rate PIT on declared income.
///
/// `rate` is a fraction (0.10 for the 2026 flat 10%).
pub fn calculate(
    income: Decimal,
    rate: Decimal,
) -> PitResult {
    PitResult {
        pit: round_naira(non_negative(income) * rate),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn flat_ten_percent_applies() {
        let result = calculate(dec!(2500000), dec!(0.10));

        assert_eq!(result.pit, dec!(250000));
    }

    #[test]
    fn zero_income_owes_nothing() {
        let result = calculate(Decimal::ZERO, dec!(0.10));

        assert_eq!(result.pit, Decimal::ZERO);
    }

    #[test]
    fn fractional_pit_rounds_to_whole_naira() {
        let result = calculate(dec!(1005), dec!(0.10));

        assert_eq!(result.pit, dec!(101));
    }
}
