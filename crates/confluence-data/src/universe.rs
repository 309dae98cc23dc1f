//! Default ticker universe.

use confluence_traits::Symbol;

/// Thirty US large caps used by the demo dashboard.
pub const DEFAULT_UNIVERSE: [&str; 30] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "JPM", "V", "WMT", "PG", "JNJ", "UNH",
    "HD", "BAC", "XOM", "CVX", "MA", "ADBE", "CRM", "NFLX", "INTC", "VZ", "CSCO", "DIS", "PEP",
    "KO", "CMCSA", "T", "ABT",
];

/// [`DEFAULT_UNIVERSE`] as owned symbols.
#[must_use]
pub fn default_universe() -> Vec<Symbol> {
    DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect()
}
