use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when validating a year schedule.
///
/// These indicate misconfigured reference data (a bad band CSV, a
/// hand-edited tier table), never bad user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The PAYE band table has no bands at all.
    #[error("PAYE band table for year {0} is empty")]
    EmptyBandTable(i32),

    /// A finite band limit is not strictly greater than the previous one.
    #[error("band {index} limit {limit} does not increase on the previous band")]
    BandLimitNotAscending { index: usize, limit: Decimal },

    /// A finite band limit sits at or below the exemption threshold, which
    /// anchors the first band's lower bound.
    #[error("band limit {limit} is not above the exemption threshold {exemption}")]
    BandLimitBelowExemption { limit: Decimal, exemption: Decimal },

    /// An unbounded band appears before the end of the table.
    #[error("unbounded band at position {0} is not the last band")]
    UnboundedBandNotLast(usize),

    /// The table has no unbounded band, leaving high incomes uncovered.
    #[error("band table has no unbounded final band")]
    MissingUnboundedBand,

    /// A marginal rate is outside [0, 1].
    #[error("rate {0} is outside the range 0 to 1")]
    RateOutOfRange(Decimal),

    /// The CIT tier table is empty.
    #[error("CIT tier table for year {0} is empty")]
    EmptyTierTable(i32),

    /// A finite tier ceiling is not strictly greater than the previous one.
    #[error("CIT tier {index} ceiling {ceiling} does not increase on the previous tier")]
    TierCeilingNotAscending { index: usize, ceiling: Decimal },

    /// The tier table has no unbounded tier, leaving high turnovers uncovered.
    #[error("CIT tier table has no unbounded final tier")]
    MissingUnboundedTier,
}
