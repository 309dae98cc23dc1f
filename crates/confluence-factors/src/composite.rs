//! Reversal-momentum composite factor.
//!
//! `alpha = reversal * momentum`. The score is large and positive only when
//! both legs agree: an oversold close pattern (positive reversal) together
//! with upward drift, or the symmetric overbought-and-falling case.

use confluence_traits::{AlphaFactor, BarSeries, Components, FactorResult, Result, Symbol};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::threshold::SignalThresholds;
use crate::window::{
    MomentumConfig, PriceChange, ReversalConfig, ShortTermMomentum, ShortTermReversal,
};

/// The formula the composite factor documents.
pub const REVERSAL_MOMENTUM_FORMULA: &str =
    "-rank(ts_sum((close-low)/(high-close),3)) * rank(ts_delta(close,3))";

/// Configuration for the reversal-momentum factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalMomentumConfig {
    /// Reversal window settings
    pub reversal: ReversalConfig,
    /// Momentum lag settings
    pub momentum: MomentumConfig,
}

impl ReversalMomentumConfig {
    /// Validates both legs.
    ///
    /// # Errors
    ///
    /// Returns [`confluence_traits::Error::InvalidConfig`] if either leg is invalid.
    pub fn validate(&self) -> Result<()> {
        self.reversal.validate()?;
        self.momentum.validate()
    }
}

/// Short-term reversal x momentum alpha factor.
///
/// # Example
///
/// ```ignore
/// use confluence_factors::{ReversalMomentum, SignalThresholds};
///
/// let factor = ReversalMomentum::default();
/// let result = factor.evaluate(&series, &SignalThresholds::default())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReversalMomentum {
    reversal: ShortTermReversal,
    momentum: ShortTermMomentum,
}

impl ReversalMomentum {
    /// Create the factor from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`confluence_traits::Error::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: ReversalMomentumConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reversal: ShortTermReversal::new(config.reversal),
            momentum: ShortTermMomentum::new(config.momentum),
        })
    }

    /// The reversal leg.
    #[must_use]
    pub const fn reversal(&self) -> &ShortTermReversal {
        &self.reversal
    }

    /// The momentum leg.
    #[must_use]
    pub const fn momentum(&self) -> &ShortTermMomentum {
        &self.momentum
    }

    /// Evaluates one series with raw (unranked) components.
    ///
    /// # Errors
    ///
    /// Returns [`confluence_traits::Error::InsufficientData`] when the series is shorter than
    /// [`AlphaFactor::lookback`].
    pub fn evaluate(
        &self,
        series: &BarSeries,
        thresholds: &SignalThresholds,
    ) -> Result<FactorResult> {
        let components = self.components(series)?;
        let price = PriceChange::from_series(series)?;
        Ok(factor_result(
            series.ticker(),
            components,
            self.compose(&components),
            thresholds,
            price,
        ))
    }
}

impl AlphaFactor for ReversalMomentum {
    fn name(&self) -> &str {
        "reversal_momentum"
    }

    fn formula(&self) -> &str {
        REVERSAL_MOMENTUM_FORMULA
    }

    fn lookback(&self) -> usize {
        self.reversal
            .window()
            .max(self.momentum.min_bars())
            .max(PriceChange::MIN_BARS)
    }

    fn components(&self, series: &BarSeries) -> Result<Components> {
        series.require(self.lookback())?;

        let reversal = self.reversal.compute(series)?;
        let momentum = self.momentum.compute(series)?;
        trace!(ticker = series.ticker(), reversal, momentum, "window statistics");

        Ok(Components::new(reversal, momentum))
    }

    fn compose(&self, components: &Components) -> f64 {
        components.reversal * components.momentum
    }
}

/// Assembles a [`FactorResult`] from already-computed parts.
pub fn factor_result(
    ticker: impl Into<Symbol>,
    components: Components,
    alpha_score: f64,
    thresholds: &SignalThresholds,
    price: PriceChange,
) -> FactorResult {
    FactorResult {
        ticker: ticker.into(),
        reversal: components.reversal,
        momentum: components.momentum,
        alpha_score,
        signal: thresholds.classify(alpha_score),
        close: price.close,
        change: price.change,
        change_percent: price.change_percent,
    }
}
