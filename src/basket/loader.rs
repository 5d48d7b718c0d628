//! Load import lines from import_basket.csv

use super::{ImportLine, MedicationCategory};
use crate::currency::BaseCurrency;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Default basket file location
pub const DEFAULT_BASKET_PATH: &str = "data/import_basket.csv";

/// Raw CSV row matching import_basket.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "UnitCost")]
    unit_cost: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

impl CsvRow {
    fn to_line(self) -> Result<ImportLine, Box<dyn Error>> {
        let category = MedicationCategory::from_name(&self.category)
            .ok_or_else(|| format!("Unknown Category: {}", self.category))?;

        let base = BaseCurrency::from_code(&self.currency)
            .ok_or_else(|| format!("Unknown Currency: {}", self.currency))?;

        if self.unit_cost < 0.0 {
            return Err(format!("Negative UnitCost for {}", self.product).into());
        }

        Ok(ImportLine {
            product: self.product,
            category,
            base,
            unit_cost: self.unit_cost,
            volume: self.volume,
        })
    }
}

/// Load all import lines from a CSV file
pub fn load_import_lines<P: AsRef<Path>>(path: P) -> Result<Vec<ImportLine>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut lines = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        lines.push(row.to_line()?);
    }

    log::debug!("loaded {} import lines", lines.len());
    Ok(lines)
}

/// Load import lines from any reader (e.g., string buffer)
pub fn load_import_lines_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ImportLine>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut lines = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        lines.push(row.to_line()?);
    }

    Ok(lines)
}

/// Load the demo basket from the default location
pub fn load_default_basket() -> Result<Vec<ImportLine>, Box<dyn Error>> {
    load_import_lines(DEFAULT_BASKET_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Product,Category,Currency,UnitCost,Volume
Amoxicillin 500mg,Antibiotics,EUR,4.2,250000
Insulin glargine,Antidiabetics,USD,23.5,40000
";

    #[test]
    fn test_load_from_reader() {
        let lines = load_import_lines_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].product, "Amoxicillin 500mg");
        assert_eq!(lines[0].category, MedicationCategory::Antibiotics);
        assert_eq!(lines[0].base, BaseCurrency::EUR);
        assert_eq!(lines[1].volume, 40000);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let bad = "\
Product,Category,Currency,UnitCost,Volume
Lipstick,Cosmetics,EUR,4.2,100
";
        assert!(load_import_lines_from_reader(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let bad = "\
Product,Category,Currency,UnitCost,Volume
Amoxicillin 500mg,Antibiotics,JPY,4.2,100
";
        assert!(load_import_lines_from_reader(bad.as_bytes()).is_err());
    }
}
