//! Batch evaluation and cross-sectional ranking for confluence.
//!
//! This crate provides:
//! - [`Evaluator`]: applies a factor across a provider's universe, singly or
//!   in batch, optionally on the rayon thread pool
//! - Cross-sectional percentile ranking of factor components
//! - Signal counts and a Polars view of batch results
//!
//! # Example
//!
//! ```rust,ignore
//! use confluence_eval::{Evaluator, EvaluatorConfig, SignalSummary};
//!
//! let evaluator = Evaluator::new(store, EvaluatorConfig::default());
//! let results = evaluator.evaluate_all()?;
//! let summary = SignalSummary::from_results(&results);
//! ```

pub mod evaluator;
pub mod frame;
pub mod rank;
pub mod summary;

// Re-export main types
pub use evaluator::{Evaluator, EvaluatorConfig, ScoringMode, TickerOutcome};
pub use frame::results_to_frame;
pub use rank::rank_components;
pub use summary::SignalSummary;
