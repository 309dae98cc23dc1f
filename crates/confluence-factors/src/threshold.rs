//! Buy/sell classification of a composite score.

use confluence_traits::{Error, Result, TradeSignal};
use serde::{Deserialize, Serialize};

/// Default score a signal must exceed to be a buy.
pub const DEFAULT_BUY_THRESHOLD: f64 = 0.5;

/// Default score a signal must fall below to be a sell.
pub const DEFAULT_SELL_THRESHOLD: f64 = -0.5;

/// Thresholds for turning an alpha score into a [`TradeSignal`].
///
/// Comparisons are strict: a score exactly on a threshold is neutral.
/// Classification is stateless, with no hysteresis between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    buy: f64,
    sell: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            buy: DEFAULT_BUY_THRESHOLD,
            sell: DEFAULT_SELL_THRESHOLD,
        }
    }
}

impl SignalThresholds {
    /// Creates thresholds, requiring both to be finite and `sell <= buy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] otherwise.
    pub fn new(buy: f64, sell: f64) -> Result<Self> {
        if !buy.is_finite() || !sell.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "thresholds must be finite (buy={buy}, sell={sell})"
            )));
        }
        if sell > buy {
            return Err(Error::InvalidConfig(format!(
                "sell threshold {sell} is above buy threshold {buy}"
            )));
        }
        Ok(Self { buy, sell })
    }

    /// Score a buy must exceed.
    pub const fn buy(&self) -> f64 {
        self.buy
    }

    /// Score a sell must fall below.
    pub const fn sell(&self) -> f64 {
        self.sell
    }

    /// Classifies `score`: above `buy` is a buy, below `sell` a sell,
    /// anything else (NaN included) neutral.
    pub fn classify(&self, score: f64) -> TradeSignal {
        if score > self.buy {
            TradeSignal::Buy
        } else if score < self.sell {
            TradeSignal::Sell
        } else {
            TradeSignal::Neutral
        }
    }
}
