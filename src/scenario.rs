//! Scenario runner for efficient batch projections
//!
//! Pre-loads reference data once, then allows running many projections with
//! different inputs without re-reading CSV files.

use crate::assumptions::{MarketAssumptions, FORECAST_WINDOW_MONTHS};
use crate::basket::{BasketImpact, ImportLine};
use crate::currency::{CurrencyPair, TargetCurrency};
use crate::error::ProjectionError;
use crate::projection::{ProjectionEngine, ProjectionInput, ProjectionResult};

/// Pre-loaded scenario runner for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Sweep the forecast window for one pair
/// let sweep = runner.run_horizons(pair, 10_000.0, 1_000)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Pre-loaded reference data
    base_assumptions: MarketAssumptions,
}

impl ScenarioRunner {
    /// Create runner with the built-in reference snapshot
    pub fn new() -> Self {
        Self {
            base_assumptions: MarketAssumptions::default_reference(),
        }
    }

    /// Create runner by loading reference data from CSV files
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: MarketAssumptions::from_csv()?,
        })
    }

    /// Create runner from a specific reference data directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            base_assumptions: MarketAssumptions::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built reference data
    pub fn with_assumptions(assumptions: MarketAssumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        self.engine().project(input)
    }

    /// Sweep the whole forecast window (months 0..=6) for one pair
    pub fn run_horizons(
        &self,
        pair: CurrencyPair,
        unit_cost: f64,
        volume: u64,
    ) -> Result<Vec<ProjectionResult>, ProjectionError> {
        let engine = self.engine();
        (0..=FORECAST_WINDOW_MONTHS)
            .map(|horizon_months| {
                engine.project(&ProjectionInput {
                    pair,
                    unit_cost,
                    volume,
                    horizon_months,
                })
            })
            .collect()
    }

    /// Run one projection per supported pair at the same cost, volume and horizon
    pub fn run_matrix(
        &self,
        unit_cost: f64,
        volume: u64,
        horizon_months: u32,
    ) -> Result<Vec<(CurrencyPair, ProjectionResult)>, ProjectionError> {
        let engine = self.engine();
        CurrencyPair::all()
            .into_iter()
            .map(|pair| {
                engine
                    .project(&ProjectionInput {
                        pair,
                        unit_cost,
                        volume,
                        horizon_months,
                    })
                    .map(|result| (pair, result))
            })
            .collect()
    }

    /// Project an import basket into one target currency
    pub fn run_basket(
        &self,
        lines: &[ImportLine],
        target: TargetCurrency,
        horizon_months: u32,
    ) -> Result<BasketImpact, ProjectionError> {
        BasketImpact::project(&self.engine(), lines, target, horizon_months)
    }

    /// Get reference to base assumptions for inspection/modification
    pub fn assumptions(&self) -> &MarketAssumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut MarketAssumptions {
        &mut self.base_assumptions
    }

    fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.base_assumptions.clone())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{BaseCurrency, TargetCurrency};

    #[test]
    fn test_horizon_sweep() {
        let runner = ScenarioRunner::new();
        let pair = CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD);

        let results = runner.run_horizons(pair, 10_000.0, 1_000).unwrap();
        assert_eq!(results.len(), 7);

        // Rising forecast: projected total grows with the horizon
        for window in results.windows(2) {
            assert!(window[1].total_cost_projected > window[0].total_cost_projected);
        }
        assert_eq!(results[0].total_cost_projected, results[0].total_cost_current);
        assert_eq!(
            results[6].total_cost_projected,
            results[6].unit_cost_projected * 1_000.0
        );
    }

    #[test]
    fn test_matrix_covers_all_pairs() {
        let runner = ScenarioRunner::new();
        let matrix = runner.run_matrix(100.0, 50, 3).unwrap();

        assert_eq!(matrix.len(), 12);
        for (pair, result) in &matrix {
            assert!(result.current_rate > 0.0, "{}", pair);
            assert!(result.interpolated_rate > 0.0, "{}", pair);
        }
    }
}
