#![doc(issue_tracker_base_url = "https://github.com/factordynamics/confluence/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the confluence factor pipeline.
//!
//! This crate provides the foundational abstractions shared by every other
//! confluence crate: price bars and bar series, the data-provider contract,
//! the alpha factor trait, the per-ticker result and the error type.

/// The version of the confluence-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod factor;
pub mod provider;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use factor::{AlphaFactor, Components};
pub use provider::SeriesProvider;
pub use types::{Bar, BarSeries, Date, FactorResult, MarketData, Symbol, TradeSignal};
