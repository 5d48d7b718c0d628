//! CSV-based reference data loader
//!
//! Loads spot rates and forecast variations from CSV files in data/reference/

use crate::currency::{BaseCurrency, CurrencyPair, TargetCurrency};
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

fn parse_pair(base: &str, target: &str) -> Result<CurrencyPair, Box<dyn Error>> {
    let base = BaseCurrency::from_code(base)
        .ok_or_else(|| format!("unsupported base currency '{}'", base))?;
    let target = TargetCurrency::from_code(target)
        .ok_or_else(|| format!("unsupported target currency '{}'", target))?;
    Ok(CurrencyPair::new(base, target))
}

/// Load spot rates from CSV
/// Expected columns: base,target,rate
pub fn load_spot_rates(path: &Path) -> Result<Vec<(CurrencyPair, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("spot_rates.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;
        let pair = parse_pair(&record[0], &record[1])?;
        let rate: f64 = record[2].parse()?;

        if rate <= 0.0 {
            return Err(format!("spot rate for {} must be positive, got {}", pair, rate).into());
        }
        entries.push((pair, rate));
    }

    log::debug!("loaded {} spot rates from {:?}", entries.len(), path);
    Ok(entries)
}

/// Load forecast variations from CSV
/// Expected columns: base,target,variation_percent (signed, over 6 months)
pub fn load_forecast_variations(path: &Path) -> Result<Vec<(CurrencyPair, f64)>, Box<dyn Error>> {
    let file = File::open(path.join("forecast_variation.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;
        let pair = parse_pair(&record[0], &record[1])?;
        let variation: f64 = record[2].parse()?;
        entries.push((pair, variation));
    }

    log::debug!("loaded {} forecast variations from {:?}", entries.len(), path);
    Ok(entries)
}

/// All reference data loaded from a directory
#[derive(Debug, Clone)]
pub struct LoadedReference {
    pub spot_rates: Vec<(CurrencyPair, f64)>,
    pub forecast_variations: Vec<(CurrencyPair, f64)>,
}

impl LoadedReference {
    /// Load from the default location (data/reference/)
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(DEFAULT_REFERENCE_PATH))
    }

    /// Load from a specific directory
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            spot_rates: load_spot_rates(path)?,
            forecast_variations: load_forecast_variations(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let pair = parse_pair("EUR", "MAD").unwrap();
        assert_eq!(pair.base, BaseCurrency::EUR);
        assert_eq!(pair.target, TargetCurrency::MAD);

        assert!(parse_pair("JPY", "MAD").is_err());
        assert!(parse_pair("EUR", "EUR").is_err());
    }
}
