//! Data collaborators for the confluence pipeline.
//!
//! The pipeline itself never acquires data; it reads whatever a
//! [`confluence_traits::SeriesProvider`] hands it. This crate provides the
//! providers used by the CLI, demos and tests:
//!
//! - [`BarStore`]: an in-memory provider, filled directly, from a Polars
//!   [`confluence_traits::MarketData`] frame, or by the mock generator
//! - [`MockGenerator`]: deterministic, seedable random-walk bars
//!
//! # Usage
//!
//! ```rust,ignore
//! use confluence_data::{MockConfig, MockGenerator, default_universe};
//!
//! let generator = MockGenerator::new(MockConfig { seed: 7, ..Default::default() })?;
//! let store = generator.build_store(&default_universe())?;
//! let history = store.history("AAPL")?;
//! ```

mod mock;
mod store;
mod universe;

pub use mock::{MAX_DAYS, MockConfig, MockGenerator};
pub use store::BarStore;
pub use universe::{DEFAULT_UNIVERSE, default_universe};
