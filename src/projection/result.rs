//! Input and output structures for projections

use crate::currency::CurrencyPair;
use serde::{Deserialize, Serialize};

/// Parameters for a single cost projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Currency pair to project
    pub pair: CurrencyPair,

    /// Cost per unit in the base currency (non-negative)
    pub unit_cost: f64,

    /// Number of units imported
    pub volume: u64,

    /// Months into the forecast window, 0 = today, 6 = full forecast
    pub horizon_months: u32,
}

/// Complete output of one cost projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Spot rate today (target units per base unit)
    pub current_rate: f64,

    /// Rate at the end of the 6-month forecast window
    pub forecast_rate: f64,

    /// Rate interpolated at the requested horizon
    pub interpolated_rate: f64,

    /// Unit cost in target currency at the current rate
    pub unit_cost_current: f64,

    /// Unit cost in target currency at the interpolated rate
    pub unit_cost_projected: f64,

    /// Total import cost at the current rate
    pub total_cost_current: f64,

    /// Total import cost at the interpolated rate
    pub total_cost_projected: f64,

    /// Projected minus current total cost (positive = costs rise)
    pub delta: f64,

    /// Delta as a percentage of the current total; 0 when the current total is 0
    pub delta_percent: f64,
}

/// One month of a projection schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Months from today (0..=horizon)
    pub month: u32,

    /// Interpolated rate at this month
    pub rate: f64,

    /// Unit cost in target currency at this month's rate
    pub unit_cost: f64,

    /// Total import cost at this month's rate
    pub total_cost: f64,

    /// Total cost delta versus month 0
    pub delta: f64,

    /// Delta as a percentage of the month-0 total; 0 when that total is 0
    pub delta_percent: f64,
}
