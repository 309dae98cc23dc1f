//! Batch evaluator.
//!
//! Applies a factor across the universe of a [`SeriesProvider`] and returns
//! one [`FactorResult`] per ticker in universe order. Sorting, filtering and
//! grouping are left to consumers.

use std::sync::Arc;

use confluence_factors::{PriceChange, ReversalMomentum, SignalThresholds, factor_result};
use confluence_traits::{
    AlphaFactor, BarSeries, Components, Error, FactorResult, Result, SeriesProvider, Symbol,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::rank::rank_components;

/// How components are turned into a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Multiply the raw window statistics.
    ///
    /// The documented formula wraps both legs in `rank(...)`; this mode skips
    /// that step and treats the raw values as if already ranked.
    #[default]
    Raw,
    /// Percentile-rank each leg across the universe before multiplying.
    ///
    /// Scores then fall in `[-1, 0)`, so the default `+/-0.5` thresholds can
    /// only produce sell or neutral signals.
    CrossSectionalRank,
}

/// Configuration for the batch evaluator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Raw or cross-sectionally ranked components
    pub mode: ScoringMode,
    /// Buy/sell classification thresholds
    pub thresholds: SignalThresholds,
    /// Evaluate tickers on the rayon thread pool
    pub parallel: bool,
}

/// Outcome for one ticker of a per-item batch.
#[derive(Debug)]
pub struct TickerOutcome {
    /// Ticker evaluated.
    pub ticker: Symbol,
    /// The result, or the error that ticker alone hit.
    pub result: Result<FactorResult>,
}

/// Everything computed from one ticker's series before scoring.
#[derive(Debug, Clone, Copy)]
struct TickerInputs {
    components: Components,
    price: PriceChange,
}

/// Evaluates a factor over an injected [`SeriesProvider`].
///
/// The evaluator owns no data of its own. Every call reads the provider's
/// current series, so two calls over an unchanged provider return identical
/// results.
///
/// # Example
///
/// ```rust,ignore
/// use confluence_eval::{Evaluator, EvaluatorConfig};
///
/// let evaluator = Evaluator::new(store, EvaluatorConfig::default());
/// let aapl = evaluator.evaluate("AAPL")?;
/// let all = evaluator.evaluate_all()?;
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<P, F = ReversalMomentum> {
    provider: P,
    factor: F,
    config: EvaluatorConfig,
}

impl<P: SeriesProvider> Evaluator<P> {
    /// Create an evaluator for the default reversal-momentum factor.
    pub fn new(provider: P, config: EvaluatorConfig) -> Self {
        Self::with_factor(provider, ReversalMomentum::default(), config)
    }
}

impl<P: SeriesProvider, F: AlphaFactor> Evaluator<P, F> {
    /// Create an evaluator for a custom factor.
    pub const fn with_factor(provider: P, factor: F, config: EvaluatorConfig) -> Self {
        Self {
            provider,
            factor,
            config,
        }
    }

    /// The injected data provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The factor being evaluated.
    pub const fn factor(&self) -> &F {
        &self.factor
    }

    /// The evaluator configuration.
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates a single ticker.
    ///
    /// In [`ScoringMode::CrossSectionalRank`] the whole universe is evaluated
    /// to build the cross-section, so any ticker's failure fails this call.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownTicker`] if `ticker` is not in the universe or the
    ///   provider has no series for it
    /// - [`Error::InsufficientData`] if its series is shorter than the
    ///   factor lookback
    pub fn evaluate(&self, ticker: &str) -> Result<FactorResult> {
        if !self.provider.contains(ticker) {
            return Err(Error::UnknownTicker(ticker.to_string()));
        }

        match self.config.mode {
            ScoringMode::Raw => {
                let inputs = self.inputs(ticker)?;
                debug!(ticker, "evaluated ticker");
                Ok(self.score(ticker, inputs.components, inputs.price))
            }
            ScoringMode::CrossSectionalRank => self
                .evaluate_all()?
                .into_iter()
                .find(|r| r.ticker == ticker)
                .ok_or_else(|| Error::UnknownTicker(ticker.to_string())),
        }
    }

    /// Evaluates every ticker in universe order, failing fast.
    ///
    /// If several tickers fail, the error returned is the one for the
    /// earliest ticker in universe order, whether or not evaluation ran in
    /// parallel.
    ///
    /// # Errors
    ///
    /// Returns the first per-ticker error ([`Error::UnknownTicker`] or
    /// [`Error::InsufficientData`]).
    pub fn evaluate_all(&self) -> Result<Vec<FactorResult>> {
        let tickers = self.provider.tickers();
        info!(
            tickers = tickers.len(),
            mode = ?self.config.mode,
            parallel = self.config.parallel,
            "evaluating universe"
        );

        let inputs = self
            .gather(&tickers)
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        let results = match self.config.mode {
            ScoringMode::Raw => tickers
                .iter()
                .zip(&inputs)
                .map(|(ticker, i)| self.score(ticker, i.components, i.price))
                .collect(),
            ScoringMode::CrossSectionalRank => self.score_ranked(&tickers, &inputs),
        };

        info!(results = inputs.len(), "universe evaluated");
        Ok(results)
    }

    /// Evaluates every ticker in universe order, keeping per-ticker errors.
    ///
    /// One ticker's failure never hides another's success. In
    /// [`ScoringMode::CrossSectionalRank`] the cross-section is formed from
    /// the tickers that succeeded.
    pub fn evaluate_each(&self) -> Vec<TickerOutcome> {
        let tickers = self.provider.tickers();
        let gathered = self.gather(&tickers);

        let scored: Vec<Option<FactorResult>> = match self.config.mode {
            ScoringMode::Raw => tickers
                .iter()
                .zip(&gathered)
                .map(|(ticker, g)| {
                    g.as_ref()
                        .ok()
                        .map(|i| self.score(ticker, i.components, i.price))
                })
                .collect(),
            ScoringMode::CrossSectionalRank => {
                let (ok_tickers, ok_inputs): (Vec<Symbol>, Vec<TickerInputs>) = tickers
                    .iter()
                    .zip(&gathered)
                    .filter_map(|(t, g)| g.as_ref().ok().map(|i| (t.clone(), *i)))
                    .unzip();
                let mut ranked = self.score_ranked(&ok_tickers, &ok_inputs).into_iter();
                gathered
                    .iter()
                    .map(|g| g.as_ref().ok().and_then(|_| ranked.next()))
                    .collect()
            }
        };

        tickers
            .into_iter()
            .zip(gathered)
            .zip(scored)
            .map(|((ticker, gathered), scored)| {
                let result = match (gathered, scored) {
                    (Err(e), _) => {
                        warn!(ticker = %ticker, error = %e, "ticker evaluation failed");
                        Err(e)
                    }
                    (Ok(_), Some(r)) => Ok(r),
                    (Ok(_), None) => Err(Error::Other(format!("{ticker}: missing score"))),
                };
                TickerOutcome { ticker, result }
            })
            .collect()
    }

    /// Computes inputs for each ticker; output index matches input index.
    fn gather(&self, tickers: &[Symbol]) -> Vec<Result<TickerInputs>> {
        if self.config.parallel {
            tickers.par_iter().map(|t| self.inputs(t)).collect()
        } else {
            tickers.iter().map(|t| self.inputs(t)).collect()
        }
    }

    fn inputs(&self, ticker: &str) -> Result<TickerInputs> {
        let series: Arc<BarSeries> = self.provider.series(ticker)?;
        Ok(TickerInputs {
            components: self.factor.components(&series)?,
            price: PriceChange::from_series(&series)?,
        })
    }

    fn score(&self, ticker: &str, components: Components, price: PriceChange) -> FactorResult {
        let alpha = self.factor.compose(&components);
        factor_result(ticker, components, alpha, &self.config.thresholds, price)
    }

    fn score_ranked(&self, tickers: &[Symbol], inputs: &[TickerInputs]) -> Vec<FactorResult> {
        let raw: Vec<Components> = inputs.iter().map(|i| i.components).collect();
        rank_components(&raw)
            .into_iter()
            .zip(tickers.iter().zip(inputs))
            .map(|(ranked, (ticker, i))| self.score(ticker, ranked, i.price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use confluence_data::BarStore;
    use confluence_traits::{Bar, TradeSignal};

    fn series(ticker: &str, rows: &[(f64, f64, f64)]) -> BarSeries {
        let bars = rows
            .iter()
            .zip(1u32..)
            .map(|(&(close, high, low), d)| {
                let date = NaiveDate::from_ymd_opt(2024, 9, d).unwrap();
                Bar::new(ticker, date, close, high, low, 1_000)
            })
            .collect();
        BarSeries::new(ticker, bars).unwrap()
    }

    const SCENARIO: [(f64, f64, f64); 4] = [
        (10.0, 12.0, 9.0),
        (11.0, 11.0, 10.0),
        (9.0, 10.0, 8.0),
        (12.0, 13.0, 9.0),
    ];

    fn store() -> BarStore {
        BarStore::from_series([
            series("XYZ", &SCENARIO),
            series(
                "UP",
                &[
                    (20.0, 21.0, 19.0),
                    (18.2, 19.0, 18.0),
                    (17.2, 18.0, 17.0),
                    (16.2, 17.0, 16.0),
                ],
            ),
            series(
                "FLAT",
                &[(5.0, 6.0, 4.0), (5.0, 6.0, 4.0), (5.0, 6.0, 4.0), (5.0, 6.0, 4.0)],
            ),
        ])
    }

    #[test]
    fn test_evaluate_scenario() {
        let evaluator = Evaluator::new(store(), EvaluatorConfig::default());
        let r = evaluator.evaluate("XYZ").unwrap();
        assert_relative_eq!(r.reversal, -4.0);
        assert_relative_eq!(r.momentum, 2.0);
        assert_relative_eq!(r.alpha_score, -8.0);
        assert_eq!(r.signal, TradeSignal::Sell);
    }

    #[test]
    fn test_evaluate_unknown() {
        let evaluator = Evaluator::new(store(), EvaluatorConfig::default());
        assert!(evaluator.evaluate("NOPE").unwrap_err().is_unknown_ticker());
    }

    #[test]
    fn test_evaluate_short_series_is_insufficient() {
        let mut store = store();
        store.insert(series("SHORT", &SCENARIO[..3]));
        let evaluator = Evaluator::new(store, EvaluatorConfig::default());

        let err = evaluator.evaluate("SHORT").unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                ref ticker,
                required: 4,
                available: 3,
            } if ticker == "SHORT"
        ));
        // Other tickers are unaffected in raw mode.
        assert!(evaluator.evaluate("XYZ").is_ok());
    }

    #[test]
    fn test_evaluate_all_order_and_length() {
        let evaluator = Evaluator::new(store(), EvaluatorConfig::default());
        let results = evaluator.evaluate_all().unwrap();
        let tickers: Vec<_> = results.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["XYZ", "UP", "FLAT"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq = Evaluator::new(store(), EvaluatorConfig::default())
            .evaluate_all()
            .unwrap();
        let par = Evaluator::new(
            store(),
            EvaluatorConfig {
                parallel: true,
                ..Default::default()
            },
        )
        .evaluate_all()
        .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_evaluate_all_fails_fast_on_first_error() {
        let mut store = store();
        store.insert(series("SHORT", &SCENARIO[..3]));
        store.declare("GHOST");

        for parallel in [false, true] {
            let evaluator = Evaluator::new(
                store.clone(),
                EvaluatorConfig {
                    parallel,
                    ..Default::default()
                },
            );
            let err = evaluator.evaluate_all().unwrap_err();
            assert!(
                matches!(err, Error::InsufficientData { ref ticker, .. } if ticker == "SHORT"),
                "unexpected error: {err}"
            );
        }
    }

    #[test]
    fn test_evaluate_each_keeps_successes() {
        let mut store = store();
        store.declare("GHOST");
        store.insert(series("SHORT", &SCENARIO[..3]));

        let outcomes = Evaluator::new(store, EvaluatorConfig::default()).evaluate_each();
        assert_eq!(outcomes.len(), 5);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[3].result.as_ref().unwrap_err().is_unknown_ticker());
        assert!(outcomes[4].result.as_ref().unwrap_err().is_insufficient_data());
        assert_eq!(outcomes[4].ticker, "SHORT");
    }

    #[test]
    fn test_ranked_mode() {
        let config = EvaluatorConfig {
            mode: ScoringMode::CrossSectionalRank,
            ..Default::default()
        };
        let evaluator = Evaluator::new(store(), config);
        let results = evaluator.evaluate_all().unwrap();

        // ratio sums: XYZ 4, UP 0.75, FLAT 3 -> ranks 1, 1/3, 2/3
        // deltas:     XYZ 2, UP -3.8, FLAT 0 -> ranks 1, 1/3, 2/3
        assert_relative_eq!(results[0].reversal, -1.0);
        assert_relative_eq!(results[0].momentum, 1.0);
        assert_relative_eq!(results[0].alpha_score, -1.0);
        assert_eq!(results[0].signal, TradeSignal::Sell);

        assert_relative_eq!(results[1].alpha_score, -1.0 / 9.0, epsilon = 1e-12);
        assert_eq!(results[1].signal, TradeSignal::Neutral);

        // Single-ticker evaluation ranks against the whole universe.
        let single = evaluator.evaluate("FLAT").unwrap();
        assert_eq!(single, results[2]);
        assert_relative_eq!(single.alpha_score, -4.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_config_serde() {
        let config = EvaluatorConfig {
            mode: ScoringMode::CrossSectionalRank,
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "cross_sectional_rank");
        assert_eq!(json["parallel"], false);

        let back: EvaluatorConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.mode, ScoringMode::CrossSectionalRank);
        assert_eq!(back.thresholds, SignalThresholds::default());
    }

    #[test]
    fn test_ranked_each_skips_failures() {
        let mut store = store();
        store.declare("GHOST");
        let config = EvaluatorConfig {
            mode: ScoringMode::CrossSectionalRank,
            ..Default::default()
        };
        let outcomes = Evaluator::new(store, config).evaluate_each();
        assert!(outcomes[3].result.is_err());
        let xyz = outcomes[0].result.as_ref().unwrap();
        assert_relative_eq!(xyz.alpha_score, -1.0);
    }
}
