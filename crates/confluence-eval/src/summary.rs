//! Signal counts over a batch of results.

use confluence_traits::{FactorResult, TradeSignal};
use serde::{Deserialize, Serialize};

/// Buy/sell/neutral counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    /// Number of buy signals
    pub buy: usize,
    /// Number of sell signals
    pub sell: usize,
    /// Number of neutral signals
    pub neutral: usize,
    /// Total results counted
    pub total: usize,
}

impl SignalSummary {
    /// Count signals in `results`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use confluence_eval::SignalSummary;
    ///
    /// let summary = SignalSummary::from_results(&evaluator.evaluate_all()?);
    /// println!("{} buys of {}", summary.buy, summary.total);
    /// ```
    pub fn from_results(results: &[FactorResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            match r.signal {
                TradeSignal::Buy => acc.buy += 1,
                TradeSignal::Sell => acc.sell += 1,
                TradeSignal::Neutral => acc.neutral += 1,
            }
            acc.total += 1;
            acc
        })
    }

    /// Count of `signal` in the batch.
    pub const fn count(&self, signal: TradeSignal) -> usize {
        match signal {
            TradeSignal::Buy => self.buy,
            TradeSignal::Sell => self.sell,
            TradeSignal::Neutral => self.neutral,
        }
    }
}
