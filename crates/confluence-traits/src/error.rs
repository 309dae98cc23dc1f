//! Error types for the confluence pipeline.
//!
//! Whole-series shortfalls and unknown tickers are surfaced through [`Error`].
//! Per-day numeric degeneracy inside a window (a zero `high - close`
//! denominator) is recovered where it happens and never reaches this type.

use thiserror::Error;

use crate::Symbol;

/// The main error type for confluence operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The series is shorter than the window a statistic needs.
    #[error("Insufficient data for {ticker}: {required} bars required, {available} available")]
    InsufficientData {
        /// Ticker whose series fell short.
        ticker: Symbol,
        /// Minimum number of bars the computation needs.
        required: usize,
        /// Number of bars actually present.
        available: usize,
    },

    /// The ticker is absent from the universe or the data provider.
    #[error("Unknown ticker: {0}")]
    UnknownTicker(Symbol),

    /// A bar series violated its ordering or ownership invariants.
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// A configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::InsufficientData`] value.
    pub fn insufficient(ticker: impl Into<Symbol>, required: usize, available: usize) -> Self {
        Self::InsufficientData {
            ticker: ticker.into(),
            required,
            available,
        }
    }

    /// Whether this error means the requested ticker does not exist.
    pub const fn is_unknown_ticker(&self) -> bool {
        matches!(self, Self::UnknownTicker(_))
    }

    /// Whether this error is a whole-series shortfall.
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for confluence operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::insufficient("AAPL", 4, 3);
        assert_eq!(
            err.to_string(),
            "Insufficient data for AAPL: 4 bars required, 3 available"
        );

        let err = Error::UnknownTicker("ZZZZ".to_string());
        assert_eq!(err.to_string(), "Unknown ticker: ZZZZ");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::insufficient("AAPL", 4, 0).is_insufficient_data());
        assert!(!Error::insufficient("AAPL", 4, 0).is_unknown_ticker());
        assert!(Error::UnknownTicker("X".into()).is_unknown_ticker());
    }

    #[test]
    fn test_error_from_string() {
        let err: Error = "boom".into();
        assert!(matches!(err, Error::Other(ref m) if m == "boom"));

        let err: Error = String::from("bang").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(Error::Other("fail".to_string()));
        assert!(err_result.is_err());
    }
}
