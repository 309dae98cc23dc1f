//! History command implementation.

use crate::data::DataSource;
use anyhow::Result;

/// Print the raw bar history for `ticker`.
pub(crate) fn show_history(source: &DataSource, ticker: &str) -> Result<()> {
    let store = source.store()?;
    let series = store.history(ticker)?;

    println!("{ticker}: {} bars ending {}", series.len(), source.end());
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10}",
        "Date", "Close", "High", "Low", "Volume"
    );
    println!("{}", "─".repeat(56));
    for bar in series.bars() {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            bar.date.to_string(),
            bar.close,
            bar.high,
            bar.low,
            bar.volume
        );
    }
    Ok(())
}
