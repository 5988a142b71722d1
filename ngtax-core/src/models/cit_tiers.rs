use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ScheduleError;

/// One turnover tier of the Companies Income Tax schedule.
///
/// The rate applies to the whole turnover once the tier matches; CIT is a
/// tiered flat tax, not a progressive one. `label` is the descriptive text
/// shown alongside SME quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitTier {
    /// Inclusive turnover ceiling; `None` marks the final unbounded tier.
    pub max_turnover: Option<Decimal>,
    /// Flat rate on turnover as a fraction.
    pub rate: Decimal,
    /// Tier description, e.g. "SME bracket 20% CIT".
    pub label: String,
}

/// Ordered CIT tiers by ascending turnover ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitTierTable {
    pub tax_year: i32,
    pub tiers: Vec<CitTier>,
}

impl CitTierTable {
    /// The 2026 Nigerian CIT tiers: 0% up to N25m turnover, 20% up to
    /// N100m, 30% above.
    pub fn nigeria_2026() -> Self {
        Self {
            tax_year: 2026,
            tiers: vec![
                CitTier {
                    max_turnover: Some(Decimal::new(25_000_000, 0)),
                    rate: Decimal::ZERO,
                    label: "Micro business - 0% CIT".to_string(),
                },
                CitTier {
                    max_turnover: Some(Decimal::new(100_000_000, 0)),
                    rate: Decimal::new(20, 2),
                    label: "SME bracket 20% CIT".to_string(),
                },
                CitTier {
                    max_turnover: None,
                    rate: Decimal::new(30, 2),
                    label: "Standard CIT 30%".to_string(),
                },
            ],
        }
    }

    /// The tier covering `turnover`, or `None` on an empty table.
    pub fn tier_for(&self, turnover: Decimal) -> Option<&CitTier> {
        self.tiers
            .iter()
            .find(|tier| match tier.max_turnover {
                Some(ceiling) => turnover <= ceiling,
                None => true,
            })
    }

    /// Validates the tier table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - the table is empty
    /// - any rate is outside [0, 1]
    /// - finite ceilings are not strictly increasing
    /// - the final tier is not unbounded
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.tiers.is_empty() {
            return Err(ScheduleError::EmptyTierTable(self.tax_year));
        }

        let last = self.tiers.len() - 1;
        let mut previous: Option<Decimal> = None;

        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange(tier.rate));
            }
            if let Some(ceiling) = tier.max_turnover {
                if previous.is_some_and(|p| ceiling <= p) {
                    return Err(ScheduleError::TierCeilingNotAscending { index, ceiling });
                }
                previous = Some(ceiling);
            }
        }

        match self.tiers[last].max_turnover {
            None => Ok(()),
            Some(_) => Err(ScheduleError::MissingUnboundedTier),
        }
    }
}
