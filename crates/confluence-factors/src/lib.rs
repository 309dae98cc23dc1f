//! Window statistics and the composite factor for confluence.
//!
//! This crate provides:
//! - Window statistics: short-term reversal, short-term momentum, price change
//! - The reversal-momentum composite factor and its signal thresholds
//! - A registry describing what is available
//!
//! All computations are pure functions of a borrowed
//! [`confluence_traits::BarSeries`].
//!
//! # Example
//!
//! ```ignore
//! use confluence_factors::{ReversalMomentum, SignalThresholds};
//!
//! let factor = ReversalMomentum::default();
//! let result = factor.evaluate(&series, &SignalThresholds::default())?;
//! println!("{} {:.2} {}", result.ticker, result.alpha_score, result.signal);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod composite;
pub mod registry;
pub mod threshold;
pub mod window;

// Re-export key types
pub use composite::{
    REVERSAL_MOMENTUM_FORMULA, ReversalMomentum, ReversalMomentumConfig, factor_result,
};
pub use registry::{FactorCategory, FactorInfo};
pub use threshold::{DEFAULT_BUY_THRESHOLD, DEFAULT_SELL_THRESHOLD, SignalThresholds};
pub use window::{PriceChange, ShortTermMomentum, ShortTermReversal};
