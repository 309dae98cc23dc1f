//! Alpha factor trait.
//!
//! A factor turns one [`BarSeries`] into a pair of window statistics, the
//! reversal and momentum [`Components`], and composes them into a single
//! score. Composition is kept separate from the statistics so an evaluator can
//! swap raw components for cross-sectionally ranked ones before composing.

use serde::{Deserialize, Serialize};

use crate::{BarSeries, Result};

/// The two window statistics a factor is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Reversal component.
    pub reversal: f64,
    /// Momentum component.
    pub momentum: f64,
}

impl Components {
    /// Creates a component pair.
    pub const fn new(reversal: f64, momentum: f64) -> Self {
        Self { reversal, momentum }
    }
}

/// A reversal/momentum alpha factor.
///
/// Implementations must be pure: the same series always yields bit-identical
/// components and scores. They should be thread-safe (`Send + Sync`) so the
/// evaluator can run them across a universe in parallel.
///
/// # Example
///
/// ```no_run
/// use confluence_traits::{AlphaFactor, BarSeries, Components, Result};
///
/// struct Flat;
///
/// impl AlphaFactor for Flat {
///     fn name(&self) -> &str {
///         "flat"
///     }
///
///     fn formula(&self) -> &str {
///         "0"
///     }
///
///     fn lookback(&self) -> usize {
///         1
///     }
///
///     fn components(&self, series: &BarSeries) -> Result<Components> {
///         series.require(self.lookback())?;
///         Ok(Components::new(0.0, 0.0))
///     }
///
///     fn compose(&self, _components: &Components) -> f64 {
///         0.0
///     }
/// }
/// ```
pub trait AlphaFactor: Send + Sync {
    /// Unique, descriptive name used in logs and registries.
    fn name(&self) -> &str;

    /// Human-readable formula, e.g. `-rank(ts_sum(...)) * rank(ts_delta(...))`.
    fn formula(&self) -> &str;

    /// Minimum number of bars [`AlphaFactor::components`] needs.
    fn lookback(&self) -> usize;

    /// Computes the window statistics for the latest bar of `series`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InsufficientData`] when `series` holds fewer
    /// than [`AlphaFactor::lookback`] bars.
    fn components(&self, series: &BarSeries) -> Result<Components>;

    /// Combines components into the composite alpha score.
    fn compose(&self, components: &Components) -> f64;
}
