//! Currency enumerations and pair type
//!
//! Base currencies are the invoice currencies of pharmaceutical suppliers;
//! target currencies are the local currencies the import cost converts into.
//! Both are closed enumerations so an unsupported code is rejected at the
//! parsing boundary, never inside the projection model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoice currency of the supplier (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseCurrency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
}

impl BaseCurrency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            BaseCurrency::USD => "USD",
            BaseCurrency::EUR => "EUR",
            BaseCurrency::GBP => "GBP",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(BaseCurrency::USD),
            "EUR" => Some(BaseCurrency::EUR),
            "GBP" => Some(BaseCurrency::GBP),
            _ => None,
        }
    }

    /// All supported invoice currencies
    pub fn all() -> [BaseCurrency; 3] {
        [BaseCurrency::USD, BaseCurrency::EUR, BaseCurrency::GBP]
    }
}

impl fmt::Display for BaseCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Local currency the import cost is converted into (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetCurrency {
    /// Moroccan Dirham
    MAD,
    /// Algerian Dinar
    DZD,
    /// Tunisian Dinar
    TND,
    /// CFA Franc (BCEAO)
    XOF,
}

impl TargetCurrency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            TargetCurrency::MAD => "MAD",
            TargetCurrency::DZD => "DZD",
            TargetCurrency::TND => "TND",
            TargetCurrency::XOF => "XOF",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "MAD" => Some(TargetCurrency::MAD),
            "DZD" => Some(TargetCurrency::DZD),
            "TND" => Some(TargetCurrency::TND),
            "XOF" => Some(TargetCurrency::XOF),
            _ => None,
        }
    }

    /// All supported local currencies
    pub fn all() -> [TargetCurrency; 4] {
        [
            TargetCurrency::MAD,
            TargetCurrency::DZD,
            TargetCurrency::TND,
            TargetCurrency::XOF,
        ]
    }
}

impl fmt::Display for TargetCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Currency pair for rate lookups (1 base unit = rate target units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: BaseCurrency,
    pub target: TargetCurrency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: BaseCurrency, target: TargetCurrency) -> Self {
        Self { base, target }
    }

    /// Full cross-product of supported base and target currencies
    pub fn all() -> Vec<CurrencyPair> {
        let mut pairs = Vec::with_capacity(12);
        for base in BaseCurrency::all() {
            for target in TargetCurrency::all() {
                pairs.push(CurrencyPair::new(base, target));
            }
        }
        pairs
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.target)
    }
}
