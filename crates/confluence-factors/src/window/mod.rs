//! Trailing-window statistics over a single bar series.
//!
//! - Reversal: negated 3-bar sum of `(close - low) / (high - close)`
//! - Momentum: 3-bar close delta
//! - Price change: one-day change of the latest close
//!
//! Every statistic is strict about history: too few bars is an
//! `InsufficientData` error, never a silent zero. Per-day numeric degeneracy
//! in the reversal ratio is the one case recovered in place.

mod change;
mod momentum;
mod reversal;

pub use change::PriceChange;
pub use momentum::{MomentumConfig, ShortTermMomentum};
pub use reversal::{ReversalConfig, ShortTermReversal, day_ratio};
