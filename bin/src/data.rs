//! Data loading utilities for the Confluence CLI.

use chrono::{NaiveDate, Utc};
use confluence_data::{BarStore, MockConfig, MockGenerator, default_universe};
use confluence_traits::{Error, Result};

/// Where the CLI gets its bars from.
#[derive(Debug, Clone)]
pub(crate) struct DataSource {
    seed: u64,
    days: usize,
    end: NaiveDate,
}

impl DataSource {
    /// Mock data ending at `end`, or today when unset.
    pub(crate) fn new(seed: u64, days: usize, end: Option<NaiveDate>) -> Self {
        Self {
            seed,
            days,
            end: end.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }

    /// Generate the default universe.
    pub(crate) fn store(&self) -> Result<BarStore> {
        let config = MockConfig {
            seed: self.seed,
            days: self.days,
            end_date: self.end,
            ..Default::default()
        };
        MockGenerator::new(config)?.build_store(&default_universe())
    }

    pub(crate) const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| Error::InvalidConfig(format!("Invalid date format: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use confluence_traits::SeriesProvider;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        let result = parse_date("invalid");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_store_ends_on_requested_date() {
        let end = parse_date("2024-06-28").unwrap();
        let source = DataSource::new(42, 10, Some(end));
        let store = source.store().unwrap();

        assert_eq!(store.len(), 30);
        let aapl = store.series("AAPL").unwrap();
        assert_eq!(aapl.len(), 10);
        assert_eq!(aapl.latest().unwrap().date, end);
    }

    #[test]
    fn test_oversized_days_is_an_error() {
        let source = DataSource::new(42, 1_000_000_000_000_000, None);
        assert!(matches!(source.store(), Err(Error::InvalidConfig(_))));
    }
}
