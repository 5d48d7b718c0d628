//! Spot exchange-rate reference table
//!
//! Rates are quoted as target units per 1 unit of base currency and are
//! read-only after construction. The built-in table matches the published
//! reference snapshot used by the dashboard views.

use crate::currency::{BaseCurrency, CurrencyPair, TargetCurrency};
use crate::error::ProjectionError;
use std::collections::HashMap;

/// Spot rates by currency pair
#[derive(Debug, Clone)]
pub struct SpotRateTable {
    rates: HashMap<CurrencyPair, f64>,
}

impl SpotRateTable {
    /// Create from explicit (pair, rate) entries
    pub fn new(entries: Vec<(CurrencyPair, f64)>) -> Self {
        Self {
            rates: entries.into_iter().collect(),
        }
    }

    /// Built-in reference snapshot
    pub fn reference() -> Self {
        use BaseCurrency::*;
        use TargetCurrency::*;

        let entries = vec![
            (CurrencyPair::new(USD, MAD), 9.85),
            (CurrencyPair::new(USD, DZD), 134.5),
            (CurrencyPair::new(USD, TND), 3.12),
            (CurrencyPair::new(USD, XOF), 602.5),
            (CurrencyPair::new(EUR, MAD), 10.75),
            (CurrencyPair::new(EUR, DZD), 146.8),
            (CurrencyPair::new(EUR, TND), 3.41),
            (CurrencyPair::new(EUR, XOF), 655.96),
            (CurrencyPair::new(GBP, MAD), 12.65),
            (CurrencyPair::new(GBP, DZD), 172.3),
            (CurrencyPair::new(GBP, TND), 4.01),
            (CurrencyPair::new(GBP, XOF), 771.2),
        ];

        Self::new(entries)
    }

    /// Get the spot rate for a pair
    pub fn rate(&self, pair: CurrencyPair) -> Result<f64, ProjectionError> {
        self.rates
            .get(&pair)
            .copied()
            .ok_or(ProjectionError::UnknownPair { pair })
    }

    /// Number of configured pairs
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Check that every supported pair has a rate
    pub fn check_complete(&self) -> Result<(), ProjectionError> {
        for pair in CurrencyPair::all() {
            if !self.rates.contains_key(&pair) {
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
        let table = SpotRateTable::reference();
        let rate = table
            .rate(CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD))
            .unwrap();
        assert_eq!(rate, 10.75);
    }

    #[test]
    fn test_reference_is_complete() {
        let table = SpotRateTable::reference();
        assert_eq!(table.len(), 12);
        assert!(table.check_complete().is_ok());
    }

    #[test]
    fn test_missing_pair() {
        let table = SpotRateTable::new(vec![(
            CurrencyPair::new(BaseCurrency::USD, TargetCurrency::MAD),
            9.85,
        )]);
        let missing = CurrencyPair::new(BaseCurrency::EUR, TargetCurrency::MAD);
        assert_eq!(
            table.rate(missing),
            Err(ProjectionError::UnknownPair { pair: missing })
        );
        assert!(table.check_complete().is_err());
    }
}
