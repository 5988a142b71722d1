//! PAYE (Pay-As-You-Earn) computation for Nigerian employment income.
//!
//! This module implements the 2026 PAYE derivation: statutory reliefs are
//! subtracted from gross salary to reach taxable income, the first
//! N800,000 is exempt, and the remainder is taxed through the progressive
//! band schedule.
//!
//! # Derivation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Consolidated Relief Allowance: greater of N200,000 or 1% + 20% of gross |
//! | 2    | Pension contribution: 8% of basic salary |
//! | 3    | Rent relief: lesser of N500,000 or 20% of annual rent paid |
//! | 4    | Taxable before exemption: gross minus CRA, pension, NHIS, life assurance, rent relief and other allowances (floored at 0) |
//! | 5    | Taxable after exemption: step 4 minus N800,000 (floored at 0) |
//! | 6    | Annual tax: progressive bands applied to step 5 |
//! | 7    | Monthly tax: annual tax / 12, rounded |
//! | 8    | Effective rate: annual tax / gross as a percentage, 2 decimals |
//!
//! Transport, utility and leave allowances are collected on the declaration
//! but do not enter step 4; only `other_allowances` and the named reliefs
//! reduce taxable income under the current schedule.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ngtax_core::calculations::paye::PayeCalculator;
//! use ngtax_core::models::{IncomeDeclaration, PayeSchedule};
//!
//! let schedule = PayeSchedule::nigeria_2026();
//! let calculator = PayeCalculator::new(&schedule);
//!
//! let declaration = IncomeDeclaration {
//!     gross_salary: dec!(5000000),
//!     basic_salary: dec!(2000000),
//!     ..Default::default()
//! };
//!
//! let result = calculator.calculate(&declaration).unwrap();
//!
//! assert_eq!(result.reliefs.consolidated_relief, dec!(1050000));
//! assert_eq!(result.reliefs.pension_contribution, dec!(160000));
//! assert_eq!(result.taxable_after_exemption, dec!(2990000));
//! assert_eq!(result.annual_tax, dec!(536100));
//! assert_eq!(result.monthly_tax, dec!(44675));
//! assert_eq!(result.effective_rate, dec!(10.72));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{max, non_negative, round_naira};
use crate::models::{IncomeDeclaration, PayeSchedule};

/// Errors that can occur during a PAYE assessment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayeError {
    /// The schedule carries no progressive bands. This is reference-data
    /// misconfiguration; user input can never trigger it.
    #[error("no PAYE bands configured for year {0}")]
    EmptyBandTable(i32),
}

/// Statutory reliefs derived from a declaration.
///
/// Rent relief is carried unrounded (a fraction of rent paid); the taxable
/// amounts derived from it are rounded to whole naira.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefSet {
    /// Consolidated Relief Allowance, floored at the schedule minimum.
    pub consolidated_relief: Decimal,

    /// Employee pension contribution, 8% of basic salary.
    pub pension_contribution: Decimal,

    /// Rent relief, capped at the schedule ceiling.
    pub rent_relief: Decimal,

    /// The tax-free threshold applied after the other reliefs.
    pub statutory_exemption: Decimal,
}

/// Result of a PAYE assessment.
///
/// All monetary fields are whole naira; `effective_rate` is a percentage
/// with two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeResult {
    /// The reliefs applied in this assessment.
    pub reliefs: ReliefSet,

    /// Taxable income before the exemption threshold is removed.
    pub taxable_before_exemption: Decimal,

    /// Taxable income above the exemption threshold.
    pub taxable_after_exemption: Decimal,

    /// Annual PAYE liability.
    pub annual_tax: Decimal,

    /// Monthly PAYE withholding, annual tax / 12 rounded.
    pub monthly_tax: Decimal,

    /// Annual tax over gross salary as a percentage (0 when gross is 0).
    pub effective_rate: Decimal,
}

/// Calculator for PAYE assessments against one year's schedule.
#[derive(Debug, Clone)]
pub struct PayeCalculator<'a> {
    schedule: &'a PayeSchedule,
}

impl<'a> PayeCalculator<'a> {
    /// Creates a calculator borrowing the given schedule.
    ///
    /// The schedule's band table should already satisfy
    /// [`PayeSchedule::validate`]; bands must be in ascending order with an
    /// unbounded final band.
    pub fn new(schedule: &'a PayeSchedule) -> Self {
        Self { schedule }
    }

    /// Runs the full assessment for one declaration.
    ///
    /// Negative amounts on the declaration are clamped to zero before use;
    /// every numeric input otherwise produces a defined result.
    ///
    /// # Errors
    ///
    /// Returns [`PayeError::EmptyBandTable`] if the schedule has no bands.
    pub fn calculate(
        &self,
        declaration: &IncomeDeclaration,
    ) -> Result<PayeResult, PayeError> {
        if self.schedule.bands.is_empty() {
            warn!(tax_year = self.schedule.tax_year, "PAYE schedule has no bands");
            return Err(PayeError::EmptyBandTable(self.schedule.tax_year));
        }

        let declaration = declaration.sanitized();

        let reliefs = self.reliefs(&declaration);
        let taxable_before = self.taxable_before_exemption(&declaration, &reliefs);
        let taxable_after = self.taxable_after_exemption(taxable_before);
        let annual_tax = self.progressive_tax(taxable_after);
        let monthly_tax = round_naira(annual_tax / Decimal::from(12));
        let effective_rate = self.effective_rate(annual_tax, declaration.gross_salary);

        Ok(PayeResult {
            reliefs,
            taxable_before_exemption: taxable_before,
            taxable_after_exemption: taxable_after,
            annual_tax,
            monthly_tax,
            effective_rate,
        })
    }

    /// Derives the relief set for a sanitized declaration.
    fn reliefs(
        &self,
        declaration: &IncomeDeclaration,
    ) -> ReliefSet {
        ReliefSet {
            consolidated_relief: self.consolidated_relief(declaration.gross_salary),
            pension_contribution: self.pension_contribution(declaration.basic_salary),
            rent_relief: self.rent_relief(declaration.housing_allowance),
            statutory_exemption: self.schedule.exemption_threshold,
        }
    }

    /// Consolidated Relief Allowance: the greater of the schedule floor or
    /// the base and gross fractions of gross salary, rounded.
    fn consolidated_relief(
        &self,
        gross: Decimal,
    ) -> Decimal {
        let fraction_of_gross =
            gross * self.schedule.cra_base_rate + gross * self.schedule.cra_gross_rate;
        round_naira(max(self.schedule.cra_floor, fraction_of_gross))
    }

    /// Pension contribution: the schedule rate applied to basic salary,
    /// rounded.
    fn pension_contribution(
        &self,
        basic: Decimal,
    ) -> Decimal {
        round_naira(basic * self.schedule.pension_rate)
    }

    /// Rent relief: a fraction of annual rent paid, capped. The housing
    /// allowance input doubles as the rent paid. Carried unrounded.
    fn rent_relief(
        &self,
        rent_paid: Decimal,
    ) -> Decimal {
        (rent_paid * self.schedule.rent_relief_rate).min(self.schedule.rent_relief_cap)
    }

    /// Taxable income before the exemption: gross minus CRA, pension, NHIS,
    /// life assurance, rent relief and other allowances, floored at zero
    /// and rounded to whole naira.
    ///
    /// Transport, utility and leave allowances are deliberately absent from
    /// the subtraction; the current schedule does not relieve them.
    fn taxable_before_exemption(
        &self,
        declaration: &IncomeDeclaration,
        reliefs: &ReliefSet,
    ) -> Decimal {
        round_naira(non_negative(
            declaration.gross_salary
                - reliefs.consolidated_relief
                - reliefs.pension_contribution
                - declaration.nhis_contribution
                - declaration.life_assurance_premium
                - reliefs.rent_relief
                - declaration.other_allowances,
        ))
    }

    /// Removes the exemption threshold, floored at zero.
    fn taxable_after_exemption(
        &self,
        taxable_before: Decimal,
    ) -> Decimal {
        non_negative(taxable_before - self.schedule.exemption_threshold)
    }

    /// Single-pass progressive tax on the amount above the exemption.
    ///
    /// The input is already net of the exemption; the exemption threshold
    /// only anchors the first band's lower bound for width computation and
    /// is never subtracted again. Band limits are absolute income levels,
    /// so the first band's width is its limit minus the threshold.
    fn progressive_tax(
        &self,
        amount_above_exemption: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut remaining = amount_above_exemption;
        let mut lower = self.schedule.exemption_threshold;

        for band in &self.schedule.bands {
            if remaining <= Decimal::ZERO {
                break;
            }
            let taxable_in_band = match band.upper_limit {
                Some(limit) => non_negative(remaining.min(limit - lower)),
                // The unbounded final band takes everything left.
                None => remaining,
            };
            tax += taxable_in_band * band.rate;
            remaining -= taxable_in_band;
            if let Some(limit) = band.upper_limit {
                lower = limit;
            }
        }

        round_naira(tax)
    }

    /// Annual tax over gross as a percentage with two decimals; zero when
    /// gross is zero.
    fn effective_rate(
        &self,
        annual_tax: Decimal,
        gross: Decimal,
    ) -> Decimal {
        if gross <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (annual_tax / gross * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn schedule() -> PayeSchedule {
        PayeSchedule::nigeria_2026()
    }

    // =========================================================================
    // consolidated_relief tests
    // =========================================================================

    #[test]
    fn consolidated_relief_uses_floor_for_low_gross() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // 21% of 500,000 is 105,000, below the floor.
        let result = calculator.consolidated_relief(dec!(500000));

        assert_eq!(result, dec!(200000));
    }

    #[test]
    fn consolidated_relief_uses_gross_fractions_above_floor() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // 1% + 20% of 1,000,000 = 210,000.
        let result = calculator.consolidated_relief(dec!(1000000));

        assert_eq!(result, dec!(210000));
    }

    #[test]
    fn consolidated_relief_never_drops_below_floor() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        for gross in [dec!(0), dec!(1), dec!(950000), dec!(952381), dec!(10000000)] {
            assert!(calculator.consolidated_relief(gross) >= dec!(200000));
        }
    }

    // =========================================================================
    // pension_contribution tests
    // =========================================================================

    #[test]
    fn pension_is_eight_percent_of_basic() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        assert_eq!(calculator.pension_contribution(dec!(500000)), dec!(40000));
        assert_eq!(calculator.pension_contribution(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn pension_rounds_to_whole_naira() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // 8% of 1,234,567 = 98,765.36
        let result = calculator.pension_contribution(dec!(1234567));

        assert_eq!(result, dec!(98765));
    }

    // =========================================================================
    // rent_relief tests
    // =========================================================================

    #[test]
    fn rent_relief_is_twenty_percent_below_cap() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        let result = calculator.rent_relief(dec!(1200000));

        assert_eq!(result, dec!(240000));
    }

    #[test]
    fn rent_relief_is_capped() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // 20% of 3,000,000 is 600,000, above the 500,000 cap.
        let result = calculator.rent_relief(dec!(3000000));

        assert_eq!(result, dec!(500000));
    }

    // =========================================================================
    // taxable income tests
    // =========================================================================

    #[test]
    fn taxable_before_exemption_subtracts_reliefs_and_other_allowances() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(1000000),
            basic_salary: dec!(500000),
            ..Default::default()
        };
        let reliefs = calculator.reliefs(&declaration);

        let result = calculator.taxable_before_exemption(&declaration, &reliefs);

        // 1,000,000 - 210,000 CRA - 40,000 pension
        assert_eq!(result, dec!(750000));
    }

    #[test]
    fn taxable_before_exemption_floors_at_zero() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(100000),
            basic_salary: dec!(100000),
            ..Default::default()
        };
        let reliefs = calculator.reliefs(&declaration);

        let result = calculator.taxable_before_exemption(&declaration, &reliefs);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn transport_utility_and_leave_allowances_do_not_reduce_taxable_income() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let bare = IncomeDeclaration {
            gross_salary: dec!(4000000),
            basic_salary: dec!(2000000),
            ..Default::default()
        };
        let with_allowances = IncomeDeclaration {
            transport_allowance: dec!(300000),
            utility_allowance: dec!(150000),
            leave_allowance: dec!(100000),
            ..bare.clone()
        };

        let bare_result = calculator.calculate(&bare).unwrap();
        let allowance_result = calculator.calculate(&with_allowances).unwrap();

        assert_eq!(bare_result, allowance_result);
    }

    #[test]
    fn other_allowances_do_reduce_taxable_income() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let bare = IncomeDeclaration {
            gross_salary: dec!(4000000),
            basic_salary: dec!(2000000),
            ..Default::default()
        };
        let with_other = IncomeDeclaration {
            other_allowances: dec!(100000),
            ..bare.clone()
        };

        let bare_result = calculator.calculate(&bare).unwrap();
        let other_result = calculator.calculate(&with_other).unwrap();

        assert_eq!(
            other_result.taxable_before_exemption,
            bare_result.taxable_before_exemption - dec!(100000)
        );
    }

    #[test]
    fn taxable_after_exemption_removes_threshold_once() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        assert_eq!(calculator.taxable_after_exemption(dec!(750000)), Decimal::ZERO);
        assert_eq!(calculator.taxable_after_exemption(dec!(800000)), Decimal::ZERO);
        assert_eq!(calculator.taxable_after_exemption(dec!(1000000)), dec!(200000));
    }

    // =========================================================================
    // progressive_tax tests
    // =========================================================================

    #[test]
    fn progressive_tax_of_zero_is_zero() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        assert_eq!(calculator.progressive_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn progressive_tax_fills_first_band_exactly_at_its_limit() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // The first band runs from the 800,000 threshold to 1,600,000, a
        // width of 800,000. An amount equal to that width is taxed fully at
        // 15% with nothing spilling into the 19% band.
        let result = calculator.progressive_tax(dec!(800000));

        assert_eq!(result, dec!(120000));
    }

    #[test]
    fn progressive_tax_spills_into_second_band() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // 800,000 at 15% = 120,000, then 400,000 at 19% = 76,000.
        let result = calculator.progressive_tax(dec!(1200000));

        assert_eq!(result, dec!(196000));
    }

    #[test]
    fn progressive_tax_reaches_the_unbounded_band() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        // Band widths above the threshold: 800,000 / 3,400,000 / 5,000,000
        // / 10,000,000 / 10,000,000, then 25% on the rest.
        // 120,000 + 646,000 + 1,000,000 + 2,200,000 + 2,400,000
        //   + 10,800,000 * 0.25 = 9,066,000.
        let result = calculator.progressive_tax(dec!(40000000));

        assert_eq!(result, dec!(9066000));
    }

    #[test]
    fn progressive_tax_is_monotonically_non_decreasing() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        let amounts = [
            dec!(0),
            dec!(1),
            dec!(799999),
            dec!(800000),
            dec!(800001),
            dec!(4200000),
            dec!(9200000),
            dec!(19200000),
            dec!(29200000),
            dec!(50000000),
        ];

        let mut previous = Decimal::ZERO;
        for amount in amounts {
            let tax = calculator.progressive_tax(amount);
            assert!(tax >= previous, "tax decreased at amount {amount}");
            previous = tax;
        }
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_below_exemption_owes_nothing() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(1000000),
            basic_salary: dec!(500000),
            ..Default::default()
        };

        let result = calculator.calculate(&declaration).unwrap();

        assert_eq!(result.reliefs.consolidated_relief, dec!(210000));
        assert_eq!(result.reliefs.pension_contribution, dec!(40000));
        assert_eq!(result.reliefs.rent_relief, Decimal::ZERO);
        assert_eq!(result.taxable_before_exemption, dec!(750000));
        assert_eq!(result.taxable_after_exemption, Decimal::ZERO);
        assert_eq!(result.annual_tax, Decimal::ZERO);
        assert_eq!(result.monthly_tax, Decimal::ZERO);
        assert_eq!(result.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn calculate_mid_income_full_breakdown() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(5000000),
            basic_salary: dec!(2000000),
            ..Default::default()
        };

        let result = calculator.calculate(&declaration).unwrap();

        // CRA 1,050,000, pension 160,000; taxable 3,790,000; above
        // exemption 2,990,000; 800,000 @ 15% + 2,190,000 @ 19% = 536,100.
        assert_eq!(result.taxable_before_exemption, dec!(3790000));
        assert_eq!(result.taxable_after_exemption, dec!(2990000));
        assert_eq!(result.annual_tax, dec!(536100));
        assert_eq!(result.monthly_tax, dec!(44675));
        assert_eq!(result.effective_rate, dec!(10.72));
    }

    #[test]
    fn calculate_with_all_deductions() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(6000000),
            basic_salary: dec!(3000000),
            housing_allowance: dec!(1000000),
            other_allowances: dec!(200000),
            nhis_contribution: dec!(60000),
            life_assurance_premium: dec!(100000),
            ..Default::default()
        };

        let result = calculator.calculate(&declaration).unwrap();

        // CRA = 21% of 6,000,000 = 1,260,000; pension = 240,000;
        // rent relief = 200,000.
        // 6,000,000 - 1,260,000 - 240,000 - 60,000 - 100,000 - 200,000
        //   - 200,000 = 3,940,000; above exemption 3,140,000.
        // 800,000 @ 15% + 2,340,000 @ 19% = 564,600.
        assert_eq!(result.reliefs.consolidated_relief, dec!(1260000));
        assert_eq!(result.reliefs.rent_relief, dec!(200000));
        assert_eq!(result.taxable_before_exemption, dec!(3940000));
        assert_eq!(result.annual_tax, dec!(564600));
    }

    #[test]
    fn calculate_rounds_fractional_rent_relief_into_whole_naira_taxable() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(2000000),
            housing_allowance: dec!(1001),
            ..Default::default()
        };

        let result = calculator.calculate(&declaration).unwrap();

        // Rent relief 200.2 stays fractional; the taxable amount rounds.
        // 2,000,000 - 420,000 - 200.2 = 1,579,799.8 -> 1,579,800.
        assert_eq!(result.reliefs.rent_relief, dec!(200.2));
        assert_eq!(result.taxable_before_exemption, dec!(1579800));
        assert_eq!(result.taxable_after_exemption, dec!(779800));
        // 779,800 @ 15% = 116,970; monthly 9,747.5 rounds up.
        assert_eq!(result.annual_tax, dec!(116970));
        assert_eq!(result.monthly_tax, dec!(9748));
        assert_eq!(result.effective_rate, dec!(5.85));
    }

    #[test]
    fn calculate_clamps_negative_inputs_to_zero() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(-1000000),
            basic_salary: dec!(-500000),
            ..Default::default()
        };

        let result = calculator.calculate(&declaration).unwrap();

        assert_eq!(result.taxable_before_exemption, Decimal::ZERO);
        assert_eq!(result.annual_tax, Decimal::ZERO);
        assert_eq!(result.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn calculate_zero_gross_has_zero_effective_rate() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);

        let result = calculator.calculate(&IncomeDeclaration::default()).unwrap();

        assert_eq!(result.effective_rate, Decimal::ZERO);
    }

    #[test]
    fn calculate_rejects_empty_band_table() {
        let mut schedule = schedule();
        schedule.bands.clear();
        let calculator = PayeCalculator::new(&schedule);

        let result = calculator.calculate(&IncomeDeclaration::default());

        assert_eq!(result, Err(PayeError::EmptyBandTable(2026)));
    }

    #[test]
    fn calculate_is_idempotent() {
        let schedule = schedule();
        let calculator = PayeCalculator::new(&schedule);
        let declaration = IncomeDeclaration {
            gross_salary: dec!(12345678),
            basic_salary: dec!(6000000),
            housing_allowance: dec!(2400000),
            ..Default::default()
        };

        let first = calculator.calculate(&declaration).unwrap();
        let second = calculator.calculate(&declaration).unwrap();

        assert_eq!(first, second);
    }
}
