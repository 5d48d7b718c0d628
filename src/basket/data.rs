//! Import basket data structures
//!
//! An import line is one medication position: what is bought, in which
//! supplier currency, at what unit cost and volume.

use crate::currency::BaseCurrency;
use serde::{Deserialize, Serialize};

/// Therapeutic category of an imported medication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicationCategory {
    Antibiotics,
    Antihypertensives,
    Antidiabetics,
    Oncology,
    Vaccines,
    Analgesics,
}

impl MedicationCategory {
    /// Get the string representation matching the basket CSV format
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationCategory::Antibiotics => "Antibiotics",
            MedicationCategory::Antihypertensives => "Antihypertensives",
            MedicationCategory::Antidiabetics => "Antidiabetics",
            MedicationCategory::Oncology => "Oncology",
            MedicationCategory::Vaccines => "Vaccines",
            MedicationCategory::Analgesics => "Analgesics",
        }
    }

    /// Parse from the basket CSV representation
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Antibiotics" => Some(MedicationCategory::Antibiotics),
            "Antihypertensives" => Some(MedicationCategory::Antihypertensives),
            "Antidiabetics" => Some(MedicationCategory::Antidiabetics),
            "Oncology" => Some(MedicationCategory::Oncology),
            "Vaccines" => Some(MedicationCategory::Vaccines),
            "Analgesics" => Some(MedicationCategory::Analgesics),
            _ => None,
        }
    }

    /// All categories
    pub fn all() -> [MedicationCategory; 6] {
        [
            MedicationCategory::Antibiotics,
            MedicationCategory::Antihypertensives,
            MedicationCategory::Antidiabetics,
            MedicationCategory::Oncology,
            MedicationCategory::Vaccines,
            MedicationCategory::Analgesics,
        ]
    }
}

/// A single import position from the basket file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLine {
    /// Product label
    pub product: String,

    /// Therapeutic category
    pub category: MedicationCategory,

    /// Supplier invoice currency
    pub base: BaseCurrency,

    /// Cost per unit in the invoice currency
    pub unit_cost: f64,

    /// Units imported per period
    pub volume: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in MedicationCategory::all() {
            assert_eq!(MedicationCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(MedicationCategory::from_name("Cosmetics"), None);
    }
}
