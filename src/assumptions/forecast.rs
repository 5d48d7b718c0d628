//! Six-month forecast variation reference table
//!
//! Each entry is the expected percentage drift of the pair's rate over the
//! fixed 6-month forecast window. Negative values mean the base currency is
//! expected to weaken against the target.

use crate::currency::{BaseCurrency, CurrencyPair, TargetCurrency};
use crate::error::ProjectionError;
use std::collections::HashMap;

/// Length of the forecast window in months
pub const FORECAST_WINDOW_MONTHS: u32 = 6;

/// Forecast variation percentages by currency pair
#[derive(Debug, Clone)]
pub struct ForecastTable {
    variations: HashMap<CurrencyPair, f64>,
}

impl ForecastTable {
    /// Create from explicit (pair, variation %) entries
    pub fn new(entries: Vec<(CurrencyPair, f64)>) -> Self {
        Self {
            variations: entries.into_iter().collect(),
        }
    }

    /// Built-in reference forecast
    pub fn reference() -> Self {
        use BaseCurrency::*;
        use TargetCurrency::*;

        let entries = vec![
            (CurrencyPair::new(USD, MAD), 3.2),
            (CurrencyPair::new(USD, DZD), 4.5),
            (CurrencyPair::new(USD, TND), 2.1),
            (CurrencyPair::new(USD, XOF), 1.8),
            (CurrencyPair::new(EUR, MAD), 2.8),
            (CurrencyPair::new(EUR, DZD), 3.7),
            (CurrencyPair::new(EUR, TND), 1.5),
            (CurrencyPair::new(EUR, XOF), 0.9),
            (CurrencyPair::new(GBP, MAD), -1.2),
            (CurrencyPair::new(GBP, DZD), 2.3),
            (CurrencyPair::new(GBP, TND), -0.8),
            (CurrencyPair::new(GBP, XOF), 1.1),
        ];

        Self::new(entries)
    }

    /// Get the expected 6-month variation (signed percentage) for a pair
    pub fn variation_percent(&self, pair: CurrencyPair) -> Result<f64, ProjectionError> {
        self.variations
            .get(&pair)
            .copied()
            .ok_or(ProjectionError::UnknownPair { pair })
    }

    /// Number of configured pairs
    pub fn len(&self) -> usize {
        self.variations.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Check that every supported pair has a forecast
    pub fn check_complete(&self) -> Result<(), ProjectionError> {
        for pair in CurrencyPair::all() {
            if !self.variations.contains_key(&pair) {
                return Err(ProjectionError::UnknownPair { pair });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lookup() {
        let table = ForecastTable::reference();
        let pair = CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD);
        assert_eq!(table.variation_percent(pair).unwrap(), 2.8);

        // GBP pairs carry the only negative forecasts
        let gbp_mad = CurrencyPair::new(BaseCurrency::GBP, TargetCurrency::MAD);
        assert_eq!(table.variation_percent(gbp_mad).unwrap(), -1.2);
    }

    #[test]
    fn test_reference_is_complete() {
        let table = ForecastTable::reference();
        assert_eq!(table.len(), 12);
        assert!(table.check_complete().is_ok());
    }
}
