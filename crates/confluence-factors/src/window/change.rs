//! Latest close and its one-day change.

use confluence_traits::{BarSeries, Error, Result};
use serde::{Deserialize, Serialize};

/// Latest close with the change from the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Latest close.
    pub close: f64,
    /// `close - previous close`.
    pub change: f64,
    /// `100 * change / previous close`.
    pub change_percent: f64,
}

impl PriceChange {
    /// Bars needed: the latest and the one before it.
    pub const MIN_BARS: usize = 2;

    /// Computes the one-day change for the latest bar of `series`.
    ///
    /// A zero previous close yields a non-finite `change_percent`; it is
    /// passed through unchanged since it is display data, not a factor input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] with fewer than two bars.
    pub fn from_series(series: &BarSeries) -> Result<Self> {
        match (series.close_back(0), series.close_back(1)) {
            (Some(close), Some(previous)) => {
                let change = close - previous;
                Ok(Self {
                    close,
                    change,
                    change_percent: change / previous * 100.0,
                })
            }
            _ => Err(Error::insufficient(
                series.ticker(),
                Self::MIN_BARS,
                series.len(),
            )),
        }
    }
}
