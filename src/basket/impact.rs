//! Basket-level impact aggregation
//!
//! Projects every import line into one target currency at one horizon and
//! totals the results across the basket.

use super::{ImportLine, MedicationCategory};
use crate::currency::{CurrencyPair, TargetCurrency};
use crate::error::ProjectionError;
use crate::projection::{ProjectionEngine, ProjectionInput, ProjectionResult};
use serde::{Deserialize, Serialize};

/// Projection of a single import line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineImpact {
    pub product: String,
    pub category: MedicationCategory,
    pub pair: CurrencyPair,
    pub result: ProjectionResult,
}

/// Aggregated projection of a whole import basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketImpact {
    /// Local currency the basket converts into
    pub target: TargetCurrency,

    /// Horizon applied to every line
    pub horizon_months: u32,

    /// Per-line projections, in basket order
    pub lines: Vec<LineImpact>,

    /// Basket total at current rates
    pub total_cost_current: f64,

    /// Basket total at interpolated rates
    pub total_cost_projected: f64,

    /// Projected minus current basket total
    pub delta: f64,

    /// Delta as a percentage of the current basket total; 0 for an empty or
    /// zero-cost basket
    pub delta_percent: f64,
}

impl BasketImpact {
    /// Project a basket of import lines into `target` at `horizon_months`
    pub fn project(
        engine: &ProjectionEngine,
        lines: &[ImportLine],
        target: TargetCurrency,
        horizon_months: u32,
    ) -> Result<Self, ProjectionError> {
        let mut impacts = Vec::with_capacity(lines.len());
        let mut total_cost_current = 0.0;
        let mut total_cost_projected = 0.0;

        for line in lines {
            let pair = CurrencyPair::new(line.base, target);
            let result = engine.project(&ProjectionInput {
                pair,
                unit_cost: line.unit_cost,
                volume: line.volume,
                horizon_months,
            })?;

            total_cost_current += result.total_cost_current;
            total_cost_projected += result.total_cost_projected;

            impacts.push(LineImpact {
                product: line.product.clone(),
                category: line.category,
                pair,
                result,
            });
        }

        let delta = total_cost_projected - total_cost_current;
        let delta_percent = if total_cost_current == 0.0 {
            0.0
        } else {
            delta / total_cost_current * 100.0
        };

        Ok(Self {
            target,
            horizon_months,
            lines: impacts,
            total_cost_current,
            total_cost_projected,
            delta,
            delta_percent,
        })
    }

    /// Total cost delta per therapeutic category, in category order
    pub fn delta_by_category(&self) -> Vec<(MedicationCategory, f64)> {
        MedicationCategory::all()
            .into_iter()
            .map(|category| {
                let delta = self
                    .lines
                    .iter()
                    .filter(|line| line.category == category)
                    .map(|line| line.result.delta)
                    .sum();
                (category, delta)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::MarketAssumptions;
    use crate::currency::BaseCurrency;
    use approx::assert_relative_eq;

    fn demo_lines() -> Vec<ImportLine> {
        vec![
            ImportLine {
                product: "Amoxicillin 500mg".to_string(),
                category: MedicationCategory::Antibiotics,
                base: BaseCurrency::EUR,
                unit_cost: 4.2,
                volume: 250_000,
            },
            ImportLine {
                product: "Insulin glargine".to_string(),
                category: MedicationCategory::Antidiabetics,
                base: BaseCurrency::USD,
                unit_cost: 23.5,
                volume: 40_000,
            },
        ]
    }

    #[test]
    fn test_totals_are_sum_of_lines() {
        let engine = ProjectionEngine::new(MarketAssumptions::default_reference());
        let impact =
            BasketImpact::project(&engine, &demo_lines(), TargetCurrency::MAD, 6).unwrap();

        assert_eq!(impact.lines.len(), 2);

        let sum_current: f64 = impact
            .lines
            .iter()
            .map(|l| l.result.total_cost_current)
            .sum();
        let sum_projected: f64 = impact
            .lines
            .iter()
            .map(|l| l.result.total_cost_projected)
            .sum();
        assert_relative_eq!(impact.total_cost_current, sum_current, max_relative = 1e-12);
        assert_relative_eq!(impact.total_cost_projected, sum_projected, max_relative = 1e-12);
        assert_relative_eq!(
            impact.delta,
            sum_projected - sum_current,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_horizon_zero_means_no_delta() {
        let engine = ProjectionEngine::new(MarketAssumptions::default_reference());
        let impact =
            BasketImpact::project(&engine, &demo_lines(), TargetCurrency::TND, 0).unwrap();

        assert_eq!(impact.delta, 0.0);
        assert_eq!(impact.delta_percent, 0.0);
    }

    #[test]
    fn test_empty_basket_is_total() {
        let engine = ProjectionEngine::new(MarketAssumptions::default_reference());
        let impact = BasketImpact::project(&engine, &[], TargetCurrency::MAD, 3).unwrap();

        assert_eq!(impact.total_cost_current, 0.0);
        assert_eq!(impact.delta_percent, 0.0);
    }

    #[test]
    fn test_delta_by_category() {
        let engine = ProjectionEngine::new(MarketAssumptions::default_reference());
        let impact =
            BasketImpact::project(&engine, &demo_lines(), TargetCurrency::MAD, 6).unwrap();

        let by_category = impact.delta_by_category();
        assert_eq!(by_category.len(), 6);

        let antibiotics = by_category
            .iter()
            .find(|(c, _)| *c == MedicationCategory::Antibiotics)
            .unwrap();
        assert_relative_eq!(antibiotics.1, impact.lines[0].result.delta, max_relative = 1e-12);

        let vaccines = by_category
            .iter()
            .find(|(c, _)| *c == MedicationCategory::Vaccines)
            .unwrap();
        assert_eq!(vaccines.1, 0.0);
    }
}
