//! Tabular view of batch results.

use confluence_traits::{FactorResult, Result};
use polars::prelude::*;

/// Converts results into a [`DataFrame`], one row per ticker in input order.
///
/// Columns: `symbol`, `reversal`, `momentum`, `alpha_score`, `signal`,
/// `close`, `change`, `change_percent`.
///
/// # Errors
///
/// Returns an error if Polars fails to build the frame.
pub fn results_to_frame(results: &[FactorResult]) -> Result<DataFrame> {
    let symbols: Vec<&str> = results.iter().map(|r| r.ticker.as_str()).collect();
    let reversal: Vec<f64> = results.iter().map(|r| r.reversal).collect();
    let momentum: Vec<f64> = results.iter().map(|r| r.momentum).collect();
    let alpha: Vec<f64> = results.iter().map(|r| r.alpha_score).collect();
    let signal: Vec<&str> = results.iter().map(|r| r.signal.as_str()).collect();
    let close: Vec<f64> = results.iter().map(|r| r.close).collect();
    let change: Vec<f64> = results.iter().map(|r| r.change).collect();
    let change_percent: Vec<f64> = results.iter().map(|r| r.change_percent).collect();

    let df = df! {
        "symbol" => symbols,
        "reversal" => reversal,
        "momentum" => momentum,
        "alpha_score" => alpha,
        "signal" => signal,
        "close" => close,
        "change" => change,
        "change_percent" => change_percent,
    }?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confluence_traits::TradeSignal;

    #[test]
    fn test_results_to_frame() {
        let results = vec![
            FactorResult {
                ticker: "AAPL".to_string(),
                reversal: -4.0,
                momentum: 2.0,
                alpha_score: -8.0,
                signal: TradeSignal::Sell,
                close: 12.0,
                change: 3.0,
                change_percent: 100.0 / 3.0,
            },
            FactorResult {
                ticker: "MSFT".to_string(),
                reversal: 0.0,
                momentum: 1.0,
                alpha_score: 0.0,
                signal: TradeSignal::Neutral,
                close: 5.0,
                change: 0.0,
                change_percent: 0.0,
            },
        ];

        let df = results_to_frame(&results).unwrap();
        assert_eq!(df.shape(), (2, 8));

        let symbols = df.column("symbol").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(symbols.get(0), Some("AAPL"));
        assert_eq!(symbols.get(1), Some("MSFT"));

        let signals = df.column("signal").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(signals.get(0), Some("sell"));

        let alpha = df.column("alpha_score").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(alpha.get(0), Some(-8.0));
    }

    #[test]
    fn test_empty_frame() {
        let df = results_to_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 8);
    }
}
