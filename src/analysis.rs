//! Static analytical reference data for the impact views
//!
//! Category sensitivities, import-origin shares and mitigation strategies are
//! fixed reference tables, loaded once and never mutated, like the rate
//! tables in `assumptions`.

use crate::basket::MedicationCategory;
use serde::{Deserialize, Serialize};

/// Rate shock the published sensitivities are normalized to
pub const SENSITIVITY_SHOCK_PERCENT: f64 = 5.0;

/// Cost sensitivity of one therapeutic category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySensitivity {
    pub category: MedicationCategory,

    /// Percentage cost increase for a 5% rise of the exchange rate
    pub impact_per_five_percent: f64,
}

impl CategorySensitivity {
    /// Cost impact (in percent) of an arbitrary rate shock, scaled linearly
    /// from the published 5% figure
    pub fn cost_impact(&self, rate_shock_percent: f64) -> f64 {
        self.impact_per_five_percent * rate_shock_percent / SENSITIVITY_SHOCK_PERCENT
    }
}

/// Published sensitivities by category
pub fn category_sensitivities() -> Vec<CategorySensitivity> {
    use MedicationCategory::*;

    vec![
        CategorySensitivity { category: Antibiotics, impact_per_five_percent: 4.2 },
        CategorySensitivity { category: Antihypertensives, impact_per_five_percent: 3.8 },
        CategorySensitivity { category: Antidiabetics, impact_per_five_percent: 5.1 },
        CategorySensitivity { category: Oncology, impact_per_five_percent: 7.3 },
        CategorySensitivity { category: Vaccines, impact_per_five_percent: 2.9 },
        CategorySensitivity { category: Analgesics, impact_per_five_percent: 1.7 },
    ]
}

/// Region of origin for imported medications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Europe,
    UnitedStates,
    India,
    China,
    Other,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Europe => "Europe",
            Origin::UnitedStates => "United States",
            Origin::India => "India",
            Origin::China => "China",
            Origin::Other => "Other",
        }
    }
}

/// Share of imports sourced from one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginShare {
    pub origin: Origin,
    pub share_percent: f64,
}

/// Import mix by region of origin; shares sum to 100
pub fn import_origin_shares() -> Vec<OriginShare> {
    vec![
        OriginShare { origin: Origin::Europe, share_percent: 45.0 },
        OriginShare { origin: Origin::UnitedStates, share_percent: 28.0 },
        OriginShare { origin: Origin::India, share_percent: 15.0 },
        OriginShare { origin: Origin::China, share_percent: 8.0 },
        OriginShare { origin: Origin::Other, share_percent: 4.0 },
    ]
}

/// Qualitative rating used by the strategy table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Time frame over which a mitigation strategy pays off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

/// A currency-risk mitigation strategy
#[derive(Debug, Clone, Serialize)]
pub struct HedgingStrategy {
    pub name: &'static str,
    pub description: &'static str,
    pub impact: Rating,
    pub complexity: Rating,
    pub horizon: StrategyHorizon,
}

/// Reference catalogue of mitigation strategies
pub fn hedging_strategies() -> Vec<HedgingStrategy> {
    vec![
        HedgingStrategy {
            name: "Forward contracts",
            description: "Negotiate forward contracts to lock purchase prices over a set period.",
            impact: Rating::High,
            complexity: Rating::Medium,
            horizon: StrategyHorizon::MediumTerm,
        },
        HedgingStrategy {
            name: "Supplier diversification",
            description: "Spread purchases across suppliers in different currency zones.",
            impact: Rating::Medium,
            complexity: Rating::High,
            horizon: StrategyHorizon::LongTerm,
        },
        HedgingStrategy {
            name: "Currency hedging",
            description: "Use financial instruments to protect against currency fluctuations.",
            impact: Rating::High,
            complexity: Rating::High,
            horizon: StrategyHorizon::ShortTerm,
        },
        HedgingStrategy {
            name: "Local production",
            description: "Invest in local production to reduce dependence on imports.",
            impact: Rating::VeryHigh,
            complexity: Rating::VeryHigh,
            horizon: StrategyHorizon::LongTerm,
        },
    ]
}
