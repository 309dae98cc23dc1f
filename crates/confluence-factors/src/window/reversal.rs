//! Short-term reversal: negated trailing sum of `(close - low) / (high - close)`.

use confluence_traits::{Bar, BarSeries, Error, Result, stats::finite_or_zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the reversal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalConfig {
    /// Number of trailing bars summed (default: 3)
    pub window: usize,
}

impl Default for ReversalConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl ReversalConfig {
    /// Checks that the window covers at least one bar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero window.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidConfig(
                "reversal window must be at least 1 bar".to_string(),
            ));
        }
        Ok(())
    }
}

/// Ratio of the close's distance from the low to its distance from the high.
///
/// A bar that closes at its high has a zero denominator; that bar, and any
/// other bar whose ratio is not finite, contributes `0.0`.
pub fn day_ratio(bar: &Bar) -> f64 {
    let ratio = (bar.close - bar.low) / (bar.high - bar.close);
    if !ratio.is_finite() {
        debug!(
            ticker = %bar.ticker,
            date = %bar.date,
            high = bar.high,
            close = bar.close,
            "degenerate reversal ratio replaced by zero"
        );
    }
    finite_or_zero(ratio)
}

/// Short-term reversal statistic.
///
/// For bars with `low <= close < high` the value is never positive. Values
/// near zero mean the instrument has been closing near its daily lows;
/// large negative values mean closes near the highs.
#[derive(Debug, Clone, Default)]
pub struct ShortTermReversal {
    config: ReversalConfig,
}

impl ShortTermReversal {
    /// Create a new reversal statistic with the given configuration.
    #[must_use]
    pub const fn new(config: ReversalConfig) -> Self {
        Self { config }
    }

    /// Number of trailing bars summed.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.config.window
    }

    /// Negated sum of [`day_ratio`] over a slice of bars.
    pub fn sum_window(bars: &[Bar]) -> f64 {
        -bars.iter().map(day_ratio).sum::<f64>()
    }

    /// Reversal component for the latest bar of `series`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] when the series is shorter than the
    /// window.
    pub fn compute(&self, series: &BarSeries) -> Result<f64> {
        let bars = series.trailing(self.config.window).ok_or_else(|| {
            Error::insufficient(series.ticker(), self.config.window, series.len())
        })?;
        Ok(Self::sum_window(bars))
    }
}
