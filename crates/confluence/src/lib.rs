#![doc(issue_tracker_base_url = "https://github.com/factordynamics/confluence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # confluence
//!
//! Short-term reversal and momentum alpha factor for equities.
//!
//! confluence is an umbrella crate that re-exports all confluence sub-crates
//! for convenience. It scores each ticker in a universe with
//!
//! ```text
//! alpha = -rank(ts_sum((close-low)/(high-close),3)) * rank(ts_delta(close,3))
//! ```
//!
//! and classifies the score into a buy, sell or neutral signal.
//!
//! ## Quick Start
//!
//! ```ignore
//! use confluence::data::{MockConfig, MockGenerator, default_universe};
//! use confluence::eval::{Evaluator, EvaluatorConfig};
//!
//! # fn main() -> confluence::Result<()> {
//! let store = MockGenerator::new(MockConfig::default())?.build_store(&default_universe())?;
//! let evaluator = Evaluator::new(store, EvaluatorConfig::default());
//!
//! for result in evaluator.evaluate_all()? {
//!     println!("{:<6} {:>8.3} {}", result.ticker, result.alpha_score, result.signal);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Bars, series, the provider contract and the factor trait
//! - [`factors`] - Window statistics, the composite factor and thresholds
//! - [`eval`] - Batch evaluation and cross-sectional ranking
//! - [`data`] - In-memory bar store and seeded mock data
//!
//! ## Architecture
//!
//! 1. A **provider** owns bar series per ticker and the universe order
//! 2. **Window statistics** reduce a series to reversal and momentum
//! 3. The **composite factor** multiplies them into an alpha score
//! 4. The **evaluator** applies the factor across the universe

/// Version information for the confluence crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core types and trait definitions.
///
/// - [`AlphaFactor`] - Per-ticker factor over a bar series
/// - [`SeriesProvider`] - Source of bar series and universe order
pub mod traits {
    pub use confluence_traits::*;
}

// Re-export core traits at top level for convenience
pub use confluence_traits::{AlphaFactor, SeriesProvider};

// Re-export error types
pub use confluence_traits::{Error, Result};

// Re-export common types
pub use confluence_traits::{Bar, BarSeries, Date, FactorResult, Symbol, TradeSignal};

// ============================================================================
// Factor Implementations
// ============================================================================

/// Window statistics and the reversal-momentum composite.
///
/// ## Window Statistics
///
/// - **ShortTermReversal**: negated 3-day sum of `(close-low)/(high-close)`
/// - **ShortTermMomentum**: 3-day close delta
/// - **PriceChange**: last-bar change and percent change
///
/// # Example
///
/// ```ignore
/// use confluence::factors::{ReversalMomentum, SignalThresholds};
///
/// let result = ReversalMomentum::default().evaluate(&series, &SignalThresholds::default())?;
/// ```
pub mod factors {
    pub use confluence_factors::*;
}

// ============================================================================
// Evaluation
// ============================================================================

/// Batch evaluation over a provider's universe.
///
/// Results are returned in universe order. A batch fails on the first
/// ticker (in universe order) that cannot be evaluated; use
/// [`eval::Evaluator::evaluate_each`] to keep partial results instead.
pub mod eval {
    pub use confluence_eval::*;
}

// ============================================================================
// Data Providers
// ============================================================================

/// In-memory bar store and seeded mock data generation.
pub mod data {
    pub use confluence_data::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use confluence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data::{BarStore, MockConfig, MockGenerator, default_universe};
    pub use crate::eval::{Evaluator, EvaluatorConfig, ScoringMode};
    pub use crate::factors::{ReversalMomentum, SignalThresholds};
    pub use crate::traits::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_factor(_factor: &dyn AlphaFactor) {}
        fn _accept_provider(_provider: &dyn SeriesProvider) {}
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let error = Error::UnknownTicker("ZZZZ".to_string());
        assert!(error.is_unknown_ticker());
    }
}
