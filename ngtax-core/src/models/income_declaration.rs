use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::non_negative;

/// Annual employment income declaration for a PAYE assessment.
///
/// All amounts are annual naira figures. Fields left out of a serialized
/// declaration default to zero, matching the blank-means-zero behaviour of
/// the intake form. Negative amounts are tolerated on input and clamped to
/// zero by [`IncomeDeclaration::sanitized`] before any computation.
///
/// `housing_allowance` doubles as the annual rent paid when deriving rent
/// relief. Transport, utility and leave allowances are captured for the
/// breakdown display but do not reduce taxable income under the current
/// schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeDeclaration {
    pub gross_salary: Decimal,
    pub basic_salary: Decimal,
    pub housing_allowance: Decimal,
    pub transport_allowance: Decimal,
    pub utility_allowance: Decimal,
    pub leave_allowance: Decimal,
    pub other_allowances: Decimal,
    pub nhis_contribution: Decimal,
    pub life_assurance_premium: Decimal,
}

impl IncomeDeclaration {
    /// Returns a copy with every amount clamped below at zero.
    pub fn sanitized(&self) -> Self {
        Self {
            gross_salary: non_negative(self.gross_salary),
            basic_salary: non_negative(self.basic_salary),
            housing_allowance: non_negative(self.housing_allowance),
            transport_allowance: non_negative(self.transport_allowance),
            utility_allowance: non_negative(self.utility_allowance),
            leave_allowance: non_negative(self.leave_allowance),
            other_allowances: non_negative(self.other_allowances),
            nhis_contribution: non_negative(self.nhis_contribution),
            life_assurance_premium: non_negative(self.life_assurance_premium),
        }
    }
}
