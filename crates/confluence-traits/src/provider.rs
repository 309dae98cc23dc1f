//! Data-acquisition contract consumed by the pipeline.
//!
//! The pipeline never fetches or generates prices itself. Whoever owns the
//! application lifecycle builds a [`SeriesProvider`] and hands it to the
//! evaluator; the provider must already hold (or be able to produce) every
//! series before evaluation starts.

use std::sync::Arc;

use crate::{BarSeries, Result, Symbol};

/// Source of bar series and of the ticker universe.
///
/// Implementations should be thread-safe (`Send + Sync`) so batch evaluation
/// can read several series in parallel.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use confluence_traits::{BarSeries, Error, Result, SeriesProvider, Symbol};
///
/// struct Empty;
///
/// impl SeriesProvider for Empty {
///     fn tickers(&self) -> Vec<Symbol> {
///         Vec::new()
///     }
///
///     fn series(&self, ticker: &str) -> Result<Arc<BarSeries>> {
///         Err(Error::UnknownTicker(ticker.to_string()))
///     }
/// }
/// ```
pub trait SeriesProvider: Send + Sync {
    /// The ticker universe, in its declared order.
    fn tickers(&self) -> Vec<Symbol>;

    /// The bar series for `ticker`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownTicker`] if the provider has no data at
    /// all for `ticker`.
    fn series(&self, ticker: &str) -> Result<Arc<BarSeries>>;

    /// Whether `ticker` belongs to the universe.
    fn contains(&self, ticker: &str) -> bool {
        self.tickers().iter().any(|t| t == ticker)
    }
}

impl<P: SeriesProvider + ?Sized> SeriesProvider for &P {
    fn tickers(&self) -> Vec<Symbol> {
        (**self).tickers()
    }

    fn series(&self, ticker: &str) -> Result<Arc<BarSeries>> {
        (**self).series(ticker)
    }

    fn contains(&self, ticker: &str) -> bool {
        (**self).contains(ticker)
    }
}

impl<P: SeriesProvider + ?Sized> SeriesProvider for Arc<P> {
    fn tickers(&self) -> Vec<Symbol> {
        (**self).tickers()
    }

    fn series(&self, ticker: &str) -> Result<Arc<BarSeries>> {
        (**self).series(ticker)
    }

    fn contains(&self, ticker: &str) -> bool {
        (**self).contains(ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bar, Date, Error};

    struct OneTicker {
        series: Arc<BarSeries>,
    }

    impl SeriesProvider for OneTicker {
        fn tickers(&self) -> Vec<Symbol> {
            vec![self.series.ticker().to_string()]
        }

        fn series(&self, ticker: &str) -> Result<Arc<BarSeries>> {
            if ticker == self.series.ticker() {
                Ok(Arc::clone(&self.series))
            } else {
                Err(Error::UnknownTicker(ticker.to_string()))
            }
        }
    }

    fn provider() -> OneTicker {
        let date = Date::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = vec![Bar::new("PEP", date, 170.0, 171.0, 169.0, 10)];
        OneTicker {
            series: Arc::new(BarSeries::new("PEP", bars).unwrap()),
        }
    }

    #[test]
    fn test_default_contains() {
        let p = provider();
        assert!(p.contains("PEP"));
        assert!(!p.contains("KO"));
    }

    #[test]
    fn test_unknown_ticker() {
        let p = provider();
        assert!(p.series("KO").unwrap_err().is_unknown_ticker());
    }

    #[test]
    fn test_blanket_impls() {
        fn bar_count<P: SeriesProvider>(p: P) -> usize {
            p.series("PEP").map(|s| s.len()).unwrap_or(0)
        }

        let p = Arc::new(provider());
        assert_eq!(p.tickers(), vec!["PEP".to_string()]);

        let borrowed: &dyn SeriesProvider = &*p;
        assert_eq!(bar_count(borrowed), 1);
        assert_eq!(bar_count(Arc::clone(&p)), 1);
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SeriesProvider>();
    }
}
