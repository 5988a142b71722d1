use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business size categories used by state presumptive tax schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessSize {
    Micro,
    Small,
    Medium,
}

impl BusinessSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "micro" => Some(Self::Micro),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            _ => None,
        }
    }
}

/// Annual presumptive tax amounts for one state, by business size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSchedule {
    /// Lowercase state code, e.g. "lagos".
    pub state: String,
    pub micro: Decimal,
    pub small: Decimal,
    pub medium: Decimal,
}

impl StateSchedule {
    pub fn amount_for(&self, size: BusinessSize) -> Decimal {
        match size {
            BusinessSize::Micro => self.micro,
            BusinessSize::Small => self.small,
            BusinessSize::Medium => self.medium,
        }
    }
}

/// Informal-sector presumptive tax schedules, keyed by state.
///
/// Not every state publishes a schedule; a missing state is a normal lookup
/// miss surfaced to the caller, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptiveSchedule {
    pub tax_year: i32,
    pub states: Vec<StateSchedule>,
}

impl PresumptiveSchedule {
    /// The 2026 schedules on record: Lagos and Oyo.
    pub fn nigeria_2026() -> Self {
        Self {
            tax_year: 2026,
            states: vec![
                StateSchedule {
                    state: "lagos".to_string(),
                    micro: Decimal::new(8_100, 0),
                    small: Decimal::new(12_000, 0),
                    medium: Decimal::new(24_000, 0),
                },
                StateSchedule {
                    state: "oyo".to_string(),
                    micro: Decimal::new(500, 0),
                    small: Decimal::new(5_000, 0),
                    medium: Decimal::new(50_000, 0),
                },
            ],
        }
    }

    /// Case-insensitive state lookup.
    pub fn state(&self, state: &str) -> Option<&StateSchedule> {
        let wanted = state.trim();
        self.states
            .iter()
            .find(|s| s.state.eq_ignore_ascii_case(wanted))
    }
}
