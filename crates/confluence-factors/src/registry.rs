//! Factor registry for discovering available statistics and factors.
//!
//! This module provides metadata and lookup for everything the
//! confluence-factors library computes.

use confluence_traits::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::composite::{REVERSAL_MOMENTUM_FORMULA, ReversalMomentum};

/// Factor category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    /// Mean reversion window statistics
    Reversion,
    /// Price momentum window statistics
    Momentum,
    /// Composite factors built from several statistics
    Composite,
}

impl FactorCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Reversion => "Mean reversion and contrarian statistics",
            Self::Momentum => "Price momentum and trend-following statistics",
            Self::Composite => "Composite alpha factors combining several statistics",
        }
    }
}

/// Metadata about a factor or window statistic.
#[derive(Debug, Clone, Serialize)]
pub struct FactorInfo {
    /// Unique identifier
    pub name: &'static str,

    /// Category classification
    pub category: FactorCategory,

    /// Formula in `ts_*` / `rank` notation
    pub formula: &'static str,

    /// Human-readable description
    pub description: &'static str,

    /// Minimum bars of history required
    pub lookback: usize,
}

/// Get information about all available factors and statistics.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    vec![
        FactorInfo {
            name: "short_term_reversal",
            category: FactorCategory::Reversion,
            formula: "-ts_sum((close-low)/(high-close),3)",
            description: "Negated 3-day sum of close position within the daily range; positive when closing near lows",
            lookback: 3,
        },
        FactorInfo {
            name: "short_term_momentum",
            category: FactorCategory::Momentum,
            formula: "ts_delta(close,3)",
            description: "3-day close-price delta; positive on recent upward drift",
            lookback: 4,
        },
        FactorInfo {
            name: "reversal_momentum",
            category: FactorCategory::Composite,
            formula: REVERSAL_MOMENTUM_FORMULA,
            description: "Product of reversal and momentum; rewards reversal setups confirmed by momentum",
            lookback: 4,
        },
    ]
}

/// Get all factors in a specific category.
#[must_use]
pub fn factors_by_category(category: &FactorCategory) -> Vec<FactorInfo> {
    available_factors()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific factor by name.
#[must_use]
pub fn get_factor_info(name: &str) -> Option<FactorInfo> {
    available_factors()
        .into_iter()
        .find(|info| info.name == name)
}

/// Create the composite factor registered under `name` or one of its aliases.
///
/// # Errors
///
/// Returns [`Error::Other`] for window statistics, which are not standalone
/// factors, and for unknown names.
pub fn create_factor(name: &str) -> Result<ReversalMomentum> {
    match name {
        "reversal_momentum" | "alpha" | "revmom" => Ok(ReversalMomentum::default()),
        "short_term_reversal" | "short_term_momentum" => Err(Error::Other(format!(
            "'{name}' is a window statistic, not a composite factor"
        ))),
        _ => Err(Error::Other(format!("Unknown factor: '{name}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confluence_traits::AlphaFactor;

    #[test]
    fn test_available_factors() {
        let factors = available_factors();
        assert_eq!(factors.len(), 3);

        let categories: Vec<_> = factors.iter().map(|f| f.category).collect();
        assert!(categories.contains(&FactorCategory::Reversion));
        assert!(categories.contains(&FactorCategory::Momentum));
        assert!(categories.contains(&FactorCategory::Composite));
    }

    #[test]
    fn test_factors_by_category() {
        assert_eq!(factors_by_category(&FactorCategory::Composite).len(), 1);
        assert_eq!(factors_by_category(&FactorCategory::Momentum).len(), 1);
    }

    #[test]
    fn test_get_factor_info() {
        let info = get_factor_info("reversal_momentum").unwrap();
        assert_eq!(info.category, FactorCategory::Composite);
        assert_eq!(info.formula, REVERSAL_MOMENTUM_FORMULA);

        assert!(get_factor_info("nonexistent_factor").is_none());
    }

    #[test]
    fn test_registry_matches_factor() {
        let factor = create_factor("alpha").unwrap();
        let info = get_factor_info(factor.name()).unwrap();
        assert_eq!(info.lookback, factor.lookback());
        assert_eq!(info.formula, factor.formula());
    }

    #[test]
    fn test_create_factor_errors() {
        assert!(create_factor("short_term_momentum").is_err());
        assert!(create_factor("nope").is_err());
    }

    #[test]
    fn test_category_descriptions() {
        assert!(!FactorCategory::Reversion.description().is_empty());
        assert!(!FactorCategory::Composite.description().is_empty());
    }
}
