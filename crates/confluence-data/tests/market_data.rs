//! Building a store from long-format market data.

use chrono::NaiveDate;
use confluence_data::{BarStore, MockConfig, MockGenerator};
use confluence_traits::{MarketData, SeriesProvider};
use polars::prelude::*;

#[test]
fn market_data_round_trips_generated_bars() {
    let generator = MockGenerator::new(MockConfig {
        days: 5,
        ..Default::default()
    })
    .unwrap();
    let series = generator.generate("IBM").unwrap();

    let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
    let n = dates.len();
    let df = df! {
        "symbol" => vec!["IBM"; n],
        "date" => dates,
        "close" => series.bars().iter().map(|b| b.close).collect::<Vec<_>>(),
        "high" => series.bars().iter().map(|b| b.high).collect::<Vec<_>>(),
        "low" => series.bars().iter().map(|b| b.low).collect::<Vec<_>>(),
        "volume" => series.bars().iter().map(|b| b.volume).collect::<Vec<_>>(),
    }
    .unwrap();

    let store = BarStore::from_market_data(&MarketData::new(df)).unwrap();
    assert_eq!(store.tickers(), vec!["IBM"]);
    assert_eq!(*store.history("IBM").unwrap(), series);
}
