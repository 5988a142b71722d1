mod cit_tiers;
mod error;
mod income_declaration;
mod paye_schedule;
mod presumptive_schedule;
mod tax_band;
mod tax_year_schedule;
mod wht_schedule;

pub use cit_tiers::{CitTier, CitTierTable};
pub use error::ScheduleError;
pub use income_declaration::IncomeDeclaration;
pub use paye_schedule::PayeSchedule;
pub use presumptive_schedule::{BusinessSize, PresumptiveSchedule, StateSchedule};
pub use tax_band::TaxBand;
pub use tax_year_schedule::TaxYearSchedule;
pub use wht_schedule::{WhtCategory, WhtSchedule};
