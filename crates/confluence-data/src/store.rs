//! In-memory bar store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use confluence_traits::{Bar, BarSeries, Error, MarketData, Result, SeriesProvider, Symbol};
use polars::prelude::*;
use tracing::debug;

/// Days between 0001-01-01 (CE day 1) and the Unix epoch used by Polars dates.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Holds one immutable [`BarSeries`] per ticker and the universe order.
///
/// A ticker may be declared in the universe without any series; looking it
/// up then fails with [`Error::UnknownTicker`], which lets the evaluator tell
/// "ticker configured but absent" apart from "too few bars".
#[derive(Debug, Clone, Default)]
pub struct BarStore {
    universe: Vec<Symbol>,
    series: HashMap<Symbol, Arc<BarSeries>>,
}

impl BarStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from series; universe order is iteration order.
    pub fn from_series(series: impl IntoIterator<Item = BarSeries>) -> Self {
        let mut store = Self::new();
        for s in series {
            store.insert(s);
        }
        store
    }

    /// Adds or replaces a series. New tickers are appended to the universe.
    pub fn insert(&mut self, series: BarSeries) {
        let ticker = series.ticker().to_string();
        self.declare(&ticker);
        self.series.insert(ticker, Arc::new(series));
    }

    /// Appends `ticker` to the universe without attaching data.
    pub fn declare(&mut self, ticker: &str) {
        if !self.universe.iter().any(|t| t == ticker) {
            self.universe.push(ticker.to_string());
        }
    }

    /// Reorders the universe. Every ticker must already be declared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTicker`] for an undeclared ticker and
    /// [`Error::InvalidSeries`] if `order` is not a permutation of the universe.
    pub fn reorder(&mut self, order: &[Symbol]) -> Result<()> {
        if let Some(missing) = order.iter().find(|t| !self.universe.contains(t)) {
            return Err(Error::UnknownTicker(missing.clone()));
        }
        let mut sorted = order.to_vec();
        sorted.sort();
        sorted.dedup();
        if sorted.len() != self.universe.len() || order.len() != self.universe.len() {
            return Err(Error::InvalidSeries(format!(
                "reorder expects a permutation of {} tickers, got {}",
                self.universe.len(),
                order.len()
            )));
        }
        self.universe = order.to_vec();
        Ok(())
    }

    /// Number of tickers in the universe.
    pub fn len(&self) -> usize {
        self.universe.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// Raw bar history for charting collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTicker`] if the store has no series for `ticker`.
    pub fn history(&self, ticker: &str) -> Result<Arc<BarSeries>> {
        self.series
            .get(ticker)
            .cloned()
            .ok_or_else(|| Error::UnknownTicker(ticker.to_string()))
    }

    /// Builds a store from long-format market data.
    ///
    /// Rows may arrive in any order; each ticker's bars are sorted by date and
    /// the universe follows first appearance in the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing, a cell is null, or a
    /// ticker has duplicate dates.
    pub fn from_market_data(data: &MarketData) -> Result<Self> {
        data.require_columns()?;
        let df = data.data();

        let symbols = df.column("symbol")?.as_materialized_series().str()?.clone();
        let dates = df.column("date")?.as_materialized_series().date()?.clone();
        let close = float_column(df, "close")?;
        let high = float_column(df, "high")?;
        let low = float_column(df, "low")?;
        let volume = df
            .column("volume")?
            .as_materialized_series()
            .cast(&DataType::UInt64)?;
        let volume = volume.u64()?;

        let mut order: Vec<Symbol> = Vec::new();
        let mut grouped: HashMap<Symbol, Vec<Bar>> = HashMap::new();

        for row in 0..df.height() {
            let null = || Error::InvalidSeries(format!("null value in row {row}"));

            let symbol = symbols.get(row).ok_or_else(null)?;
            let days = dates.physical().get(row).ok_or_else(null)?;
            let date = NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
                .ok_or_else(|| Error::InvalidSeries(format!("date out of range in row {row}")))?;

            let bar = Bar::new(
                symbol,
                date,
                close.get(row).ok_or_else(null)?,
                high.get(row).ok_or_else(null)?,
                low.get(row).ok_or_else(null)?,
                volume.get(row).ok_or_else(null)?,
            );

            if !grouped.contains_key(symbol) {
                order.push(symbol.to_string());
            }
            grouped.entry(symbol.to_string()).or_default().push(bar);
        }

        let mut store = Self::new();
        for ticker in order {
            let bars = grouped.remove(&ticker).unwrap_or_default();
            debug!(ticker = %ticker, bars = bars.len(), "ingested series");
            store.insert(BarSeries::from_unsorted(ticker, bars)?);
        }

        Ok(store)
    }
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}

impl SeriesProvider for BarStore {
    fn tickers(&self) -> Vec<Symbol> {
        self.universe.clone()
    }

    fn series(&self, ticker: &str) -> Result<Arc<BarSeries>> {
        self.history(ticker)
    }

    fn contains(&self, ticker: &str) -> bool {
        self.universe.iter().any(|t| t == ticker)
    }
}
