//! Mock rate series generators for the dashboard views
//!
//! These series are demo artifacts: the projection model never reads them.
//! Randomness is injected through the [`Noise`] trait so every series is a
//! pure function of (reference data, arguments, noise source) and tests can
//! replay a seed to get bit-identical output.

use crate::assumptions::MarketAssumptions;
use crate::currency::CurrencyPair;
use crate::error::ProjectionError;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Injectable randomness source producing values in [0, 1)
pub trait Noise {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic 64-bit linear congruential generator
///
/// Equal seeds produce equal sequences across platforms.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    state: u64,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        // Splash the seed so small seeds do not start in a low-entropy state
        Self {
            state: seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1),
        }
    }
}

impl Noise for SeededNoise {
    fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top 53 bits fill the f64 mantissa
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One month-end rate observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Month-end date of the observation
    pub date: NaiveDate,

    pub pair: CurrencyPair,
    pub rate: f64,

    /// Change versus the previous month-end, in percent
    pub monthly_change_percent: f64,

    /// Change versus twelve months earlier, in percent; 0 when the series
    /// does not reach that far back
    pub yearly_change_percent: f64,
}

/// Generate `months` month-end observations ending at `end_month`,
/// newest first
///
/// Each observation wobbles around the spot rate with a gentle drift that
/// makes older rates slightly lower, mimicking a slow appreciation of the
/// base currency over the lookback window.
pub fn monthly_history(
    assumptions: &MarketAssumptions,
    pair: CurrencyPair,
    months: usize,
    end_month: NaiveDate,
    noise: &mut dyn Noise,
) -> Result<Vec<HistoryPoint>, ProjectionError> {
    let base = assumptions.spot.rate(pair)?;

    // Draw every variation first; row i needs row i+12 for the yearly change
    let variations: Vec<f64> = (0..months)
        .map(|_| (noise.next_unit() - 0.5) * 0.05)
        .collect();
    let rates: Vec<f64> = variations
        .iter()
        .enumerate()
        .map(|(i, v)| base * (1.0 + v - i as f64 * 0.005))
        .collect();

    let points = (0..months)
        .map(|i| {
            let yearly_change_percent = match rates.get(i + 12) {
                Some(year_ago) => (rates[i] / year_ago - 1.0) * 100.0,
                None => 0.0,
            };

            HistoryPoint {
                date: end_month - Months::new(i as u32),
                pair,
                rate: rates[i],
                monthly_change_percent: variations[i] * 100.0,
                yearly_change_percent,
            }
        })
        .collect();

    Ok(points)
}

/// Which side of today a rate-path point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    Historical,
    Forecast,
}

/// One point of the 12-month chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePathPoint {
    pub date: NaiveDate,
    pub rate: f64,
    pub segment: PathSegment,
}

/// Days covered on each side of today by [`rate_path`]
const PATH_WINDOW_DAYS: i64 = 180;

/// Step between chart points
const PATH_STEP_DAYS: i64 = 15;

/// Generate the 12-month chart series for a pair: six months of noisy
/// history, today anchored at the spot rate, then a forecast segment that
/// follows the model's linear interpolation toward the 6-month forecast rate
///
/// The final point is pinned to the exact forecast rate so the chart and the
/// calculator agree at the end of the window.
pub fn rate_path(
    assumptions: &MarketAssumptions,
    pair: CurrencyPair,
    today: NaiveDate,
    noise: &mut dyn Noise,
) -> Result<Vec<RatePathPoint>, ProjectionError> {
    let spot = assumptions.spot.rate(pair)?;
    let variation = assumptions.forecast.variation_percent(pair)?;
    let forecast_rate = spot * (1.0 + variation / 100.0);

    let steps = (PATH_WINDOW_DAYS / PATH_STEP_DAYS) as usize;
    let mut points = Vec::with_capacity(2 * steps + 1);

    // History, oldest first
    for step in (1..=steps).rev() {
        let days_back = step as i64 * PATH_STEP_DAYS;
        let wobble = (noise.next_unit() - 0.5) * 0.06;
        points.push(RatePathPoint {
            date: today - Duration::days(days_back),
            rate: spot * (1.0 + wobble),
            segment: PathSegment::Historical,
        });
    }

    points.push(RatePathPoint {
        date: today,
        rate: spot,
        segment: PathSegment::Historical,
    });

    // Forecast, endpoint pinned
    for step in 1..=steps {
        let days_ahead = step as i64 * PATH_STEP_DAYS;
        let fraction = days_ahead as f64 / PATH_WINDOW_DAYS as f64;
        let interpolated = spot + (forecast_rate - spot) * fraction;
        let rate = if days_ahead == PATH_WINDOW_DAYS {
            forecast_rate
        } else {
            interpolated * (1.0 + (noise.next_unit() - 0.5) * 0.02)
        };

        points.push(RatePathPoint {
            date: today + Duration::days(days_ahead),
            rate,
            segment: PathSegment::Forecast,
        });
    }

    Ok(points)
}
