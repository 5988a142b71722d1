//! Informal-sector presumptive tax lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BusinessSize, PresumptiveSchedule};

/// Result of a presumptive tax lookup.
///
/// `amount` is `None` when no schedule covers the request; that is a normal
/// outcome for states without a published schedule, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptiveResult {
    /// Annual presumptive tax, when a schedule exists.
    pub amount: Option<Decimal>,
    /// Which schedule applied, or why none did.
    pub note: String,
}

/// Looks up the annual presumptive tax for a state and business size, both
/// given as free text.
pub fn calculate(
    state: &str,
    category: &str,
    schedule: &PresumptiveSchedule,
) -> PresumptiveResult {
    let Some(size) = BusinessSize::parse(category) else {
        return PresumptiveResult {
            amount: None,
            note: format!("Unknown business size category '{}'", category.trim()),
        };
    };

    match schedule.state(state) {
        Some(state_schedule) => PresumptiveResult {
            amount: Some(state_schedule.amount_for(size)),
            note: format!("Using {} schedule", state_schedule.state.to_uppercase()),
        },
        None => PresumptiveResult {
            amount: None,
            note: "No presumptive schedule for this state. Please consult your state IRS."
                .to_string(),
        },
    }
}
