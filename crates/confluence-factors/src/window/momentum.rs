//! Short-term momentum: close-price delta over a fixed lag.

use confluence_traits::{BarSeries, Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for short-term momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumConfig {
    /// Number of bars between the two closes compared (default: 3)
    pub lag: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self { lag: 3 }
    }
}

impl MomentumConfig {
    /// Checks that the lag is at least one bar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero lag.
    pub fn validate(&self) -> Result<()> {
        if self.lag == 0 {
            return Err(Error::InvalidConfig(
                "momentum lag must be at least 1 bar".to_string(),
            ));
        }
        Ok(())
    }
}

/// Short-term momentum statistic, `close[t] - close[t - lag]`.
///
/// Unlike return-based momentum this is a raw price delta, so it scales with
/// the price level of the instrument.
#[derive(Debug, Clone, Default)]
pub struct ShortTermMomentum {
    config: MomentumConfig,
}

impl ShortTermMomentum {
    /// Create a new momentum statistic with the given configuration.
    #[must_use]
    pub const fn new(config: MomentumConfig) -> Self {
        Self { config }
    }

    /// Bars between the compared closes.
    #[must_use]
    pub const fn lag(&self) -> usize {
        self.config.lag
    }

    /// Bars needed: the latest plus `lag` bars back, saturating at
    /// `usize::MAX`.
    #[must_use]
    pub const fn min_bars(&self) -> usize {
        self.config.lag.saturating_add(1)
    }

    /// Momentum component for the latest bar of `series`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] when fewer than `lag + 1` bars exist.
    pub fn compute(&self, series: &BarSeries) -> Result<f64> {
        match (series.close_back(0), series.close_back(self.config.lag)) {
            (Some(current), Some(past)) => Ok(current - past),
            _ => Err(Error::insufficient(
                series.ticker(),
                self.min_bars(),
                series.len(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use confluence_traits::{Bar, Date};

    fn series(closes: &[f64]) -> BarSeries {
        let bars = closes
            .iter()
            .zip(1u32..)
            .map(|(&c, d)| {
                Bar::new("TST", Date::from_ymd_opt(2024, 4, d).unwrap(), c, c + 1.0, c - 1.0, 1)
            })
            .collect();
        BarSeries::new("TST", bars).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = MomentumConfig::default();
        assert_eq!(config.lag, 3);
        assert!(config.validate().is_ok());
        assert!(MomentumConfig { lag: 0 }.validate().is_err());
    }

    #[test]
    fn test_momentum_delta() {
        let momentum = ShortTermMomentum::default();
        assert_relative_eq!(momentum.compute(&series(&[10.0, 11.0, 9.0, 12.0])).unwrap(), 2.0);
        assert_relative_eq!(
            momentum
                .compute(&series(&[50.0, 10.0, 11.0, 9.0, 7.5]))
                .unwrap(),
            -2.5
        );
    }

    #[test]
    fn test_max_lag_reports_shortfall() {
        let momentum = ShortTermMomentum::new(MomentumConfig { lag: usize::MAX });
        assert_eq!(momentum.min_bars(), usize::MAX);

        let err = momentum
            .compute(&series(&[10.0, 11.0, 9.0, 12.0, 13.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                required: usize::MAX,
                available: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_momentum_requires_lag_plus_one() {
        let momentum = ShortTermMomentum::default();
        assert_eq!(momentum.min_bars(), 4);

        let err = momentum.compute(&series(&[10.0, 11.0, 9.0])).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                required: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_custom_lag() {
        let momentum = ShortTermMomentum::new(MomentumConfig { lag: 1 });
        assert_eq!(momentum.lag(), 1);
        assert_relative_eq!(momentum.compute(&series(&[10.0, 13.0])).unwrap(), 3.0);
    }
}
