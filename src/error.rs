use crate::currency::CurrencyPair;
use thiserror::Error;

/// Errors surfaced by the projection model and reference-table validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A reference table has no entry for the pair. The built-in tables
    /// cover the full cross-product; this arises from incomplete CSV
    /// configuration and is checked at load time.
    #[error("no reference data configured for {pair}")]
    UnknownPair { pair: CurrencyPair },

    /// Horizon outside the 6-month forecast window. The model never clamps.
    #[error("horizon of {months} months outside the 0-6 month forecast window")]
    InvalidHorizon { months: u32 },
}
