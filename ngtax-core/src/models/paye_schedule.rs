use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ScheduleError, TaxBand};

/// Year-specific PAYE parameters: statutory relief rates and the
/// progressive band table.
///
/// These values are set by the tax authority and change between tax years.
/// The built-in 2026 schedule comes from [`PayeSchedule::nigeria_2026`];
/// replacement band tables can be loaded from CSV and must pass
/// [`PayeSchedule::validate`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeSchedule {
    /// The tax year this schedule applies to.
    pub tax_year: i32,

    /// Minimum Consolidated Relief Allowance in naira.
    ///
    /// For 2026 this is N200,000.
    pub cra_floor: Decimal,

    /// Base CRA fraction of gross income. For 2026, 1%.
    pub cra_base_rate: Decimal,

    /// Additional CRA fraction of gross income. For 2026, 20%.
    pub cra_gross_rate: Decimal,

    /// Employee pension contribution as a fraction of basic salary.
    ///
    /// For 2026, 8%.
    pub pension_rate: Decimal,

    /// Ceiling on rent relief in naira. For 2026, N500,000.
    pub rent_relief_cap: Decimal,

    /// Rent relief as a fraction of annual rent paid. For 2026, 20%.
    pub rent_relief_rate: Decimal,

    /// Tax-free income threshold in naira.
    ///
    /// The first N800,000 of taxable income is exempt; this value also
    /// anchors the lower bound of the first progressive band.
    pub exemption_threshold: Decimal,

    /// Progressive bands in ascending order of `upper_limit`, ending with
    /// one unbounded band.
    pub bands: Vec<TaxBand>,
}

impl PayeSchedule {
    /// The 2026 Nigerian PAYE schedule.
    pub fn nigeria_2026() -> Self {
        Self {
            tax_year: 2026,
            cra_floor: Decimal::new(200_000, 0),
            cra_base_rate: Decimal::new(1, 2),
            cra_gross_rate: Decimal::new(20, 2),
            pension_rate: Decimal::new(8, 2),
            rent_relief_cap: Decimal::new(500_000, 0),
            rent_relief_rate: Decimal::new(20, 2),
            exemption_threshold: Decimal::new(800_000, 0),
            bands: vec![
                TaxBand {
                    upper_limit: Some(Decimal::new(1_600_000, 0)),
                    rate: Decimal::new(15, 2),
                },
                TaxBand {
                    upper_limit: Some(Decimal::new(5_000_000, 0)),
                    rate: Decimal::new(19, 2),
                },
                TaxBand {
                    upper_limit: Some(Decimal::new(10_000_000, 0)),
                    rate: Decimal::new(20, 2),
                },
                TaxBand {
                    upper_limit: Some(Decimal::new(20_000_000, 0)),
                    rate: Decimal::new(22, 2),
                },
                TaxBand {
                    upper_limit: Some(Decimal::new(30_000_000, 0)),
                    rate: Decimal::new(24, 2),
                },
                TaxBand {
                    upper_limit: None,
                    rate: Decimal::new(25, 2),
                },
            ],
        }
    }

    /// Validates the band table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - the band table is empty
    /// - any rate is outside [0, 1]
    /// - a finite limit is at or below the exemption threshold
    /// - finite limits are not strictly increasing
    /// - an unbounded band is not in last position, or is missing entirely
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.bands.is_empty() {
            return Err(ScheduleError::EmptyBandTable(self.tax_year));
        }

        let last = self.bands.len() - 1;
        let mut previous = self.exemption_threshold;

        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange(band.rate));
            }
            match band.upper_limit {
                Some(limit) => {
                    if limit <= self.exemption_threshold {
                        return Err(ScheduleError::BandLimitBelowExemption {
                            limit,
                            exemption: self.exemption_threshold,
                        });
                    }
                    if limit <= previous {
                        return Err(ScheduleError::BandLimitNotAscending { index, limit });
                    }
                    previous = limit;
                }
                None => {
                    if index != last {
                        return Err(ScheduleError::UnboundedBandNotLast(index));
                    }
                }
            }
        }

        match self.bands[last].upper_limit {
            None => Ok(()),
            Some(_) => Err(ScheduleError::MissingUnboundedBand),
        }
    }
}
