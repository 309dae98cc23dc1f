//! End-to-end scoring through the umbrella crate.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use confluence::prelude::*;

fn worked_example() -> BarSeries {
    let rows = [
        (10.0, 12.0, 9.0),
        (11.0, 11.0, 10.0),
        (9.0, 10.0, 8.0),
        (12.0, 13.0, 9.0),
    ];
    let bars = rows
        .iter()
        .zip(1u32..)
        .map(|(&(close, high, low), d)| {
            let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            Bar::new("XYZ", date, close, high, low, 5_000)
        })
        .collect();
    BarSeries::new("XYZ", bars).unwrap()
}

#[test]
fn worked_example_through_evaluator() {
    let store = BarStore::from_series([worked_example()]);
    let result = Evaluator::new(store, EvaluatorConfig::default())
        .evaluate("XYZ")
        .unwrap();

    // ratios 0 (high==close), 1, 3
    assert_relative_eq!(result.reversal, -4.0);
    assert_relative_eq!(result.momentum, 2.0);
    assert_relative_eq!(result.alpha_score, -8.0);
    assert_eq!(result.signal, TradeSignal::Sell);
    assert_relative_eq!(result.close, 12.0);
    assert_relative_eq!(result.change, 3.0);
    assert_relative_eq!(result.change_percent, 100.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn unknown_ticker_through_evaluator() {
    let store = BarStore::from_series([worked_example()]);
    let err = Evaluator::new(store, EvaluatorConfig::default())
        .evaluate("ZZZZ")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownTicker(ref t) if t == "ZZZZ"));
}

#[test]
fn mock_universe_scores_every_ticker() {
    let store = MockGenerator::new(MockConfig::default())
        .unwrap()
        .build_store(&default_universe())
        .unwrap();
    let results = Evaluator::new(&store, EvaluatorConfig::default())
        .evaluate_all()
        .unwrap();

    assert_eq!(results.len(), default_universe().len());
    let thresholds = SignalThresholds::default();
    for r in &results {
        assert_eq!(r.alpha_score, r.reversal * r.momentum);
        assert_eq!(r.signal, thresholds.classify(r.alpha_score));
        assert!(r.reversal <= 0.0);
        assert!(r.close > 0.0);
    }
}

#[test]
fn same_seed_same_results() {
    let run = |seed| {
        let store = MockGenerator::new(MockConfig {
            seed,
            ..Default::default()
        })
        .unwrap()
        .build_store(&default_universe())
        .unwrap();
        Evaluator::new(store, EvaluatorConfig::default())
            .evaluate_all()
            .unwrap()
    };
    assert_eq!(run(11), run(11));
    assert_ne!(run(11), run(12));
}
