use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive tax schedule.
///
/// `upper_limit` is the absolute income ceiling of the band, not a width;
/// `None` marks the final, unbounded band. `rate` is the marginal rate as a
/// fraction (e.g. `0.15` for 15%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}
