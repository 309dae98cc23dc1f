//! Seeded mock price generation for demos and tests.
//!
//! Each ticker gets its own random stream derived from the configured seed and
//! the ticker symbol, so a ticker's bars do not depend on which other tickers
//! are generated or in what order.

use chrono::{NaiveDate, TimeDelta};
use confluence_traits::{Bar, BarSeries, Error, Result, Symbol};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::BarStore;

/// Upper bound on [`MockConfig::days`], roughly a century of daily bars.
pub const MAX_DAYS: usize = 36_500;

/// Configuration for mock bar generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Seed for the random streams
    pub seed: u64,
    /// Bars generated per ticker, one per calendar day (default: 30)
    pub days: usize,
    /// Date of the last bar
    pub end_date: NaiveDate,
    /// Lower bound of the starting price (default: 50)
    pub min_start_price: f64,
    /// Upper bound of the starting price, exclusive (default: 200)
    pub max_start_price: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            days: 30,
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            min_start_price: 50.0,
            max_start_price: 200.0,
        }
    }
}

impl MockConfig {
    /// Checks that the start price range is positive and non-empty and that
    /// `days` does not exceed [`MAX_DAYS`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.days > MAX_DAYS {
            return Err(Error::InvalidConfig(format!(
                "days {} exceeds the maximum of {MAX_DAYS}",
                self.days
            )));
        }
        if !(self.min_start_price > 0.0 && self.min_start_price < self.max_start_price) {
            return Err(Error::InvalidConfig(format!(
                "start price range [{}, {}) must be positive and non-empty",
                self.min_start_price, self.max_start_price
            )));
        }
        Ok(())
    }
}

/// Generates random-walk daily bars with a slight upward bias.
///
/// Per bar: drift of `(u - 0.48) * 2` percent, high and low up to 1.5% away
/// from the walk level, close uniform between them, volume in
/// `[100_000, 1_000_000)`.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    config: MockConfig,
}

impl MockGenerator {
    /// Create a generator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: MockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator configuration.
    pub const fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Generates the bar series for one ticker.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configured dates overflow the calendar.
    pub fn generate(&self, ticker: &str) -> Result<BarSeries> {
        let mut rng = StdRng::seed_from_u64(stream_seed(self.config.seed, ticker));
        let mut level =
            rng.random_range(self.config.min_start_price..self.config.max_start_price);

        let first = self.first_date()?;
        let mut bars = Vec::with_capacity(self.config.days);

        for date in first.iter_days().take(self.config.days) {
            let drift_pct = (rng.random::<f64>() - 0.48) * 2.0;
            level *= 1.0 + drift_pct / 100.0;

            let high = level * (1.0 + rng.random::<f64>() * 0.015);
            let low = level * (1.0 - rng.random::<f64>() * 0.015);
            let close = low + rng.random::<f64>() * (high - low);
            let volume = 100_000 + (rng.random::<f64>() * 900_000.0) as u64;

            bars.push(Bar::new(ticker, date, close, high, low, volume));
        }

        BarSeries::new(ticker, bars)
    }

    /// Generates a store holding one series per ticker, in universe order.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`MockGenerator::generate`].
    pub fn build_store(&self, universe: &[Symbol]) -> Result<BarStore> {
        let mut store = BarStore::new();
        for ticker in universe {
            store.insert(self.generate(ticker)?);
        }

        info!(
            tickers = universe.len(),
            days = self.config.days,
            seed = self.config.seed,
            "generated mock bar store"
        );
        Ok(store)
    }

    fn first_date(&self) -> Result<NaiveDate> {
        let back = self.config.days.saturating_sub(1);
        i64::try_from(back)
            .ok()
            .and_then(TimeDelta::try_days)
            .and_then(|delta| self.config.end_date.checked_sub_signed(delta))
            .ok_or_else(|| Error::InvalidConfig(format!("{back} days before end date overflows")))
    }
}

/// Mixes the global seed with the ticker (FNV-1a) into a per-ticker seed.
fn stream_seed(seed: u64, ticker: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    ticker
        .bytes()
        .fold(FNV_OFFSET ^ seed, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}
