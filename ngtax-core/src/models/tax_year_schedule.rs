use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CitTierTable, PayeSchedule, PresumptiveSchedule, ScheduleError, WhtSchedule,
};

/// Every rate table the suite needs for one tax year.
///
/// This is the versioned unit of configuration: updating for a new year
/// means constructing (or loading) a new `TaxYearSchedule`, never editing
/// literals at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearSchedule {
    pub tax_year: i32,
    pub paye: PayeSchedule,
    /// Default VAT rate in percent (not a fraction): 7.5 for 2026.
    pub vat_default_rate_percent: Decimal,
    /// Flat personal income tax rate as a fraction: 10% for 2026.
    pub pit_rate: Decimal,
    pub wht: WhtSchedule,
    pub cit: CitTierTable,
    pub presumptive: PresumptiveSchedule,
}

impl TaxYearSchedule {
    /// The built-in 2026 Nigerian schedule.
    pub fn nigeria_2026() -> Self {
        Self {
            tax_year: 2026,
            paye: PayeSchedule::nigeria_2026(),
            vat_default_rate_percent: Decimal::new(75, 1),
            pit_rate: Decimal::new(10, 2),
            wht: WhtSchedule::nigeria_2026(),
            cit: CitTierTable::nigeria_2026(),
            presumptive: PresumptiveSchedule::nigeria_2026(),
        }
    }

    /// Validates every member table.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.paye.validate()?;
        self.cit.validate()?;
        Ok(())
    }
}
