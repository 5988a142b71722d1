use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment categories subject to withholding tax at source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhtCategory {
    Contract,
    Consultancy,
    Rent,
    Dividend,
    Interest,
}

impl WhtCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Consultancy => "consultancy",
            Self::Rent => "rent",
            Self::Dividend => "dividend",
            Self::Interest => "interest",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contract" => Some(Self::Contract),
            "consultancy" => Some(Self::Consultancy),
            "rent" => Some(Self::Rent),
            "dividend" => Some(Self::Dividend),
            "interest" => Some(Self::Interest),
            _ => None,
        }
    }
}

/// Withholding tax rates by payment category, as fractions.
///
/// Unrecognized categories fall back to `default_rate` rather than failing,
/// so a WHT quote is always produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhtSchedule {
    pub contract_rate: Decimal,
    pub consultancy_rate: Decimal,
    pub rent_rate: Decimal,
    pub dividend_rate: Decimal,
    pub interest_rate: Decimal,
    pub default_rate: Decimal,
}

impl WhtSchedule {
    /// The 2026 Nigerian WHT rates: 5% on contracts and consultancy,
    /// 10% on rent, dividends and interest, 5% default.
    pub fn nigeria_2026() -> Self {
        let five_percent = Decimal::new(5, 2);
        let ten_percent = Decimal::new(10, 2);
        Self {
            contract_rate: five_percent,
            consultancy_rate: five_percent,
            rent_rate: ten_percent,
            dividend_rate: ten_percent,
            interest_rate: ten_percent,
            default_rate: five_percent,
        }
    }

    /// Rate for a parsed category; `None` (unrecognized) takes the default.
    pub fn rate_for(&self, category: Option<WhtCategory>) -> Decimal {
        match category {
            Some(WhtCategory::Contract) => self.contract_rate,
            Some(WhtCategory::Consultancy) => self.consultancy_rate,
            Some(WhtCategory::Rent) => self.rent_rate,
            Some(WhtCategory::Dividend) => self.dividend_rate,
            Some(WhtCategory::Interest) => self.interest_rate,
            None => self.default_rate,
        }
    }
}
