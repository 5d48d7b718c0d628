//! Core projection model: rate lookup, forecast interpolation, cost deltas
//!
//! All outputs are pure functions of the input and the reference tables.
//! Re-running with identical input yields bit-identical output; there is no
//! clock, no randomness, and no state carried between calls.

use crate::assumptions::{MarketAssumptions, FORECAST_WINDOW_MONTHS};
use crate::error::ProjectionError;
use super::result::{ProjectionInput, ProjectionResult, ScheduleRow};

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: MarketAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine over the given reference data
    pub fn new(assumptions: MarketAssumptions) -> Self {
        Self { assumptions }
    }

    /// Get reference to the underlying assumptions
    pub fn assumptions(&self) -> &MarketAssumptions {
        &self.assumptions
    }

    /// Project the import cost at the requested horizon
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        let current_rate = self.assumptions.spot.rate(input.pair)?;
        let variation = self.assumptions.forecast.variation_percent(input.pair)?;

        let forecast_rate = current_rate * (1.0 + variation / 100.0);
        let interpolated_rate =
            interpolate_rate(current_rate, forecast_rate, input.horizon_months)?;

        let unit_cost_current = input.unit_cost * current_rate;
        let unit_cost_projected = input.unit_cost * interpolated_rate;

        let volume = input.volume as f64;
        let total_cost_current = unit_cost_current * volume;
        let total_cost_projected = unit_cost_projected * volume;

        let delta = total_cost_projected - total_cost_current;
        let delta_percent = percent_of(delta, total_cost_current);

        Ok(ProjectionResult {
            current_rate,
            forecast_rate,
            interpolated_rate,
            unit_cost_current,
            unit_cost_projected,
            total_cost_current,
            total_cost_projected,
            delta,
            delta_percent,
        })
    }

    /// Project month by month from today to the requested horizon
    ///
    /// Row 0 carries the current figures; the final row matches `project` at
    /// the same horizon.
    pub fn project_schedule(
        &self,
        input: &ProjectionInput,
    ) -> Result<Vec<ScheduleRow>, ProjectionError> {
        let current_rate = self.assumptions.spot.rate(input.pair)?;
        let variation = self.assumptions.forecast.variation_percent(input.pair)?;
        let forecast_rate = current_rate * (1.0 + variation / 100.0);

        if input.horizon_months > FORECAST_WINDOW_MONTHS {
            return Err(ProjectionError::InvalidHorizon {
                months: input.horizon_months,
            });
        }

        let volume = input.volume as f64;
        let total_cost_current = input.unit_cost * current_rate * volume;

        let mut rows = Vec::with_capacity(input.horizon_months as usize + 1);
        for month in 0..=input.horizon_months {
            let rate = interpolate_rate(current_rate, forecast_rate, month)?;
            let unit_cost = input.unit_cost * rate;
            let total_cost = unit_cost * volume;
            let delta = total_cost - total_cost_current;

            rows.push(ScheduleRow {
                month,
                rate,
                unit_cost,
                total_cost,
                delta,
                delta_percent: percent_of(delta, total_cost_current),
            });
        }

        Ok(rows)
    }
}

/// Linear blend between the spot and forecast rates, parameterized by
/// horizon/6. The two-sided form keeps both endpoints exact: month 0 returns
/// the spot rate and month 6 returns the forecast rate with no rounding
/// drift, whatever the table values.
fn interpolate_rate(
    current_rate: f64,
    forecast_rate: f64,
    horizon_months: u32,
) -> Result<f64, ProjectionError> {
    if horizon_months > FORECAST_WINDOW_MONTHS {
        return Err(ProjectionError::InvalidHorizon {
            months: horizon_months,
        });
    }

    let fraction = horizon_months as f64 / FORECAST_WINDOW_MONTHS as f64;
    Ok(current_rate * (1.0 - fraction) + forecast_rate * fraction)
}

/// Percentage of `part` relative to `whole`; 0 by convention when `whole` is 0
/// so degenerate inputs (zero cost or zero volume) stay total.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{BaseCurrency, CurrencyPair, TargetCurrency};
    use crate::assumptions::{ForecastTable, SpotRateTable};
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(MarketAssumptions::default_reference())
    }

    fn eur_mad_input(horizon_months: u32) -> ProjectionInput {
        ProjectionInput {
            pair: CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD),
            unit_cost: 10_000.0,
            volume: 1_000,
            horizon_months,
        }
    }

    #[test]
    fn test_current_figures_at_horizon_zero() {
        let result = engine().project(&eur_mad_input(0)).unwrap();

        assert_eq!(result.current_rate, 10.75);
        assert_eq!(result.interpolated_rate, result.current_rate);
        assert_eq!(result.total_cost_current, 107_500_000.0);
        assert_eq!(result.total_cost_projected, result.total_cost_current);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.delta_percent, 0.0);
    }

    #[test]
    fn test_full_forecast_at_horizon_six() {
        let result = engine().project(&eur_mad_input(6)).unwrap();

        // 10.75 * 1.028 = 11.051
        assert_relative_eq!(result.forecast_rate, 11.051, max_relative = 1e-12);
        assert_eq!(result.interpolated_rate, result.forecast_rate);
        assert_relative_eq!(result.total_cost_projected, 110_510_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.delta, 3_010_000.0, max_relative = 1e-9);
        assert_relative_eq!(result.delta_percent, 2.8, max_relative = 1e-9);
    }

    #[test]
    fn test_endpoints_exact_for_all_pairs() {
        let engine = engine();
        for pair in CurrencyPair::all() {
            let input = ProjectionInput {
                pair,
                unit_cost: 500.0,
                volume: 20,
                horizon_months: 0,
            };
            let at_zero = engine.project(&input).unwrap();
            assert_eq!(at_zero.interpolated_rate, at_zero.current_rate, "{}", pair);

            let at_six = engine
                .project(&ProjectionInput {
                    horizon_months: 6,
                    ..input
                })
                .unwrap();
            assert_eq!(at_six.interpolated_rate, at_six.forecast_rate, "{}", pair);
        }
    }

    #[test]
    fn test_interpolation_monotonic() {
        let engine = engine();

        // EUR/MAD forecasts a rise, GBP/TND a fall
        let rising = CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD);
        let falling = CurrencyPair::new(BaseCurrency::GBP, TargetCurrency::TND);

        let mut prev_up = f64::MIN;
        let mut prev_down = f64::MAX;
        for month in 0..=6 {
            let input = ProjectionInput {
                pair: rising,
                unit_cost: 1.0,
                volume: 1,
                horizon_months: month,
            };
            let up = engine.project(&input).unwrap().interpolated_rate;
            assert!(up > prev_up);
            prev_up = up;

            let down = engine
                .project(&ProjectionInput {
                    pair: falling,
                    ..input
                })
                .unwrap()
                .interpolated_rate;
            assert!(down < prev_down);
            prev_down = down;
        }
    }

    #[test]
    fn test_zero_volume_keeps_delta_percent_total() {
        let input = ProjectionInput {
            volume: 0,
            ..eur_mad_input(6)
        };
        let result = engine().project(&input).unwrap();

        assert_eq!(result.total_cost_current, 0.0);
        assert_eq!(result.total_cost_projected, 0.0);
        assert_eq!(result.delta_percent, 0.0);

        let free = ProjectionInput {
            unit_cost: 0.0,
            ..eur_mad_input(3)
        };
        assert_eq!(engine().project(&free).unwrap().delta_percent, 0.0);
    }

    #[test]
    fn test_horizon_out_of_range() {
        let result = engine().project(&eur_mad_input(7));
        assert_eq!(result, Err(ProjectionError::InvalidHorizon { months: 7 }));
    }

    #[test]
    fn test_unknown_pair_from_incomplete_table() {
        let pair = CurrencyPair::new(BaseCurrency::USD, TargetCurrency::MAD);
        let engine = ProjectionEngine::new(MarketAssumptions {
            spot: SpotRateTable::new(vec![]),
            forecast: ForecastTable::reference(),
        });

        let input = ProjectionInput {
            pair,
            unit_cost: 100.0,
            volume: 10,
            horizon_months: 3,
        };
        assert_eq!(
            engine.project(&input),
            Err(ProjectionError::UnknownPair { pair })
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let engine = engine();
        let input = eur_mad_input(4);

        let first = engine.project(&input).unwrap();
        let second = engine.project(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_schedule_matches_point_projection() {
        let engine = engine();
        let input = eur_mad_input(6);

        let rows = engine.project_schedule(&input).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].month, 0);
        assert_eq!(rows[0].delta, 0.0);

        let result = engine.project(&input).unwrap();
        let last = rows.last().unwrap();
        assert_eq!(last.rate, result.interpolated_rate);
        assert_eq!(last.total_cost, result.total_cost_projected);
        assert_eq!(last.delta_percent, result.delta_percent);

        // interior rows agree with point projections at the same month
        for row in &rows {
            let point = engine
                .project(&ProjectionInput {
                    horizon_months: row.month,
                    ..input
                })
                .unwrap();
            assert_eq!(row.rate, point.interpolated_rate);
            assert_eq!(row.total_cost, point.total_cost_projected);
        }
    }
}
