//! Common types used throughout the confluence pipeline.
//!
//! This module defines daily price bars, the per-ticker bar series the
//! pipeline reads, the directional signal and the per-ticker factor result.

use std::fmt;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, e.g. "AAPL".
pub type Symbol = String;

/// One trading day for one instrument.
///
/// `low <= close <= high` is the expected domain but is not enforced: the
/// reversal statistic tolerates bars where `high == close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Ticker this bar belongs to.
    pub ticker: Symbol,
    /// Trading date.
    pub date: Date,
    /// Closing price.
    pub close: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Shares traded.
    pub volume: u64,
}

impl Bar {
    /// Creates a new bar.
    pub fn new(
        ticker: impl Into<Symbol>,
        date: Date,
        close: f64,
        high: f64,
        low: f64,
        volume: u64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            close,
            high,
            low,
            volume,
        }
    }
}

/// Ordered daily bars for a single ticker.
///
/// Dates are strictly ascending and every bar carries the series ticker.
/// A series is immutable once built; the pipeline only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    ticker: Symbol,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Builds a series, validating ticker ownership and date ordering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeries`] if a bar belongs to another ticker or
    /// if dates are not strictly ascending (which also rules out duplicates).
    pub fn new(ticker: impl Into<Symbol>, bars: Vec<Bar>) -> Result<Self> {
        let ticker = ticker.into();

        if let Some(bar) = bars.iter().find(|b| b.ticker != ticker) {
            return Err(Error::InvalidSeries(format!(
                "bar dated {} belongs to {}, not {}",
                bar.date, bar.ticker, ticker
            )));
        }

        if let Some(pair) = bars.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(Error::InvalidSeries(format!(
                "{}: dates must be strictly ascending ({} then {})",
                ticker, pair[0].date, pair[1].date
            )));
        }

        Ok(Self { ticker, bars })
    }

    /// Builds a series after sorting bars by date.
    ///
    /// Duplicate dates are still rejected.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BarSeries::new`].
    pub fn from_unsorted(ticker: impl Into<Symbol>, mut bars: Vec<Bar>) -> Result<Self> {
        bars.sort_by_key(|b| b.date);
        Self::new(ticker, bars)
    }

    /// The ticker of this series.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series has no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar.
    pub fn latest(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// The trailing `n` bars, or `None` when fewer than `n` exist.
    pub fn trailing(&self, n: usize) -> Option<&[Bar]> {
        self.bars
            .len()
            .checked_sub(n)
            .map(|start| &self.bars[start..])
    }

    /// Close `lag` bars before the latest one (`lag = 0` is the latest close).
    pub fn close_back(&self, lag: usize) -> Option<f64> {
        lag.checked_add(1)
            .and_then(|back| self.bars.len().checked_sub(back))
            .map(|idx| self.bars[idx].close)
    }

    /// Returns an error unless the series holds at least `required` bars.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] on shortfall.
    pub fn require(&self, required: usize) -> Result<()> {
        if self.bars.len() < required {
            return Err(Error::insufficient(
                self.ticker.clone(),
                required,
                self.bars.len(),
            ));
        }
        Ok(())
    }
}

/// Directional classification of a factor score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSignal {
    /// Score above the buy threshold.
    Buy,
    /// Score below the sell threshold.
    Sell,
    /// Anything in between, thresholds included.
    Neutral,
}

impl TradeSignal {
    /// Lowercase name, as used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-ticker output of a factor evaluation.
///
/// Built fresh on every call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    /// Ticker evaluated.
    pub ticker: Symbol,
    /// Reversal component (raw, or ranked in cross-sectional mode).
    pub reversal: f64,
    /// Momentum component (raw, or ranked in cross-sectional mode).
    pub momentum: f64,
    /// `reversal * momentum`.
    pub alpha_score: f64,
    /// Classification of `alpha_score`.
    pub signal: TradeSignal,
    /// Latest close.
    pub close: f64,
    /// Latest close minus previous close.
    pub change: f64,
    /// `change` as a percentage of the previous close.
    pub change_percent: f64,
}

/// Long-format market data as a Polars DataFrame.
///
/// # Expected Schema
///
/// - `symbol`: ticker
/// - `date`: trading date
/// - `close`, `high`, `low`: prices
/// - `volume`: shares traded
#[derive(Debug, Clone)]
pub struct MarketData {
    data: DataFrame,
}

impl MarketData {
    /// Columns a frame needs before it can be turned into bar series.
    pub const REQUIRED_COLUMNS: [&'static str; 6] =
        ["symbol", "date", "close", "high", "low", "volume"];

    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Checks if a column exists in the market data.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Fails with the first of [`Self::REQUIRED_COLUMNS`] that is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeries`] naming the missing column.
    pub fn require_columns(&self) -> Result<()> {
        match Self::REQUIRED_COLUMNS
            .iter()
            .find(|col| !self.has_column(col))
        {
            Some(col) => Err(Error::InvalidSeries(format!(
                "missing required column: {col}"
            ))),
            None => Ok(()),
        }
    }
}
