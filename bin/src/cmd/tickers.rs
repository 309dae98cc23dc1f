//! Tickers command implementation.

use crate::data::DataSource;
use anyhow::Result;
use confluence_traits::SeriesProvider;

/// Print the universe in evaluation order.
pub(crate) fn list_tickers(source: &DataSource) -> Result<()> {
    let store = source.store()?;
    let tickers = store.tickers();

    println!("Universe ({} tickers):", tickers.len());
    for (i, ticker) in tickers.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, ticker);
    }
    Ok(())
}
