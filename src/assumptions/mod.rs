//! Market reference data: spot rates and 6-month forecast variations

mod forecast;
mod spot;
pub mod loader;

pub use forecast::{ForecastTable, FORECAST_WINDOW_MONTHS};
pub use loader::LoadedReference;
pub use spot::SpotRateTable;

use crate::error::ProjectionError;
use std::path::Path;

/// Container for all market reference data used by projections
#[derive(Debug, Clone)]
pub struct MarketAssumptions {
    pub spot: SpotRateTable,
    pub forecast: ForecastTable,
}

impl MarketAssumptions {
    /// Create assumptions from the built-in reference snapshot
    pub fn default_reference() -> Self {
        Self {
            spot: SpotRateTable::reference(),
            forecast: ForecastTable::reference(),
        }
    }

    /// Load reference data from CSV files in the default location (data/reference/)
    pub fn from_csv() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_csv_path(Path::new(loader::DEFAULT_REFERENCE_PATH))
    }

    /// Load reference data from CSV files in a specific directory
    ///
    /// Completeness over the full pair cross-product is validated here so a
    /// configuration gap surfaces at startup, not in the middle of a
    /// calculation.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let loaded = LoadedReference::load_from(path)?;

        let assumptions = Self {
            spot: SpotRateTable::new(loaded.spot_rates),
            forecast: ForecastTable::new(loaded.forecast_variations),
        };
        assumptions.validate()?;

        Ok(assumptions)
    }

    /// Check that both tables cover the full cross-product of supported pairs
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if let Err(e) = self.spot.check_complete() {
            log::error!("spot rate table incomplete: {}", e);
            return Err(e);
        }
        if let Err(e) = self.forecast.check_complete() {
            log::error!("forecast table incomplete: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
