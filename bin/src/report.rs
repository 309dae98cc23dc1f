//! Grouping and table rendering for batch results.

use confluence_traits::{FactorResult, TradeSignal};

/// Results split by signal, each group in display order.
#[derive(Debug, Default)]
pub(crate) struct SignalGroups<'a> {
    pub(crate) buys: Vec<&'a FactorResult>,
    pub(crate) sells: Vec<&'a FactorResult>,
    pub(crate) neutrals: Vec<&'a FactorResult>,
}

/// Buys strongest first, sells most negative first, neutrals in universe order.
pub(crate) fn group_by_signal(results: &[FactorResult]) -> SignalGroups<'_> {
    let mut groups = SignalGroups::default();
    for r in results {
        match r.signal {
            TradeSignal::Buy => groups.buys.push(r),
            TradeSignal::Sell => groups.sells.push(r),
            TradeSignal::Neutral => groups.neutrals.push(r),
        }
    }
    // Stable sorts keep universe order among equal scores.
    groups
        .buys
        .sort_by(|a, b| b.alpha_score.total_cmp(&a.alpha_score));
    groups
        .sells
        .sort_by(|a, b| a.alpha_score.total_cmp(&b.alpha_score));
    groups
}

pub(crate) fn header() -> String {
    format!(
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>9} {:>8}",
        "Symbol", "Reversal", "Momentum", "Alpha", "Close", "Change", "Change%", "Signal"
    )
}

pub(crate) fn row(r: &FactorResult) -> String {
    format!(
        "{:<8} {:>10.4} {:>10.4} {:>10.4} {:>10.2} {:>+10.2} {:>+8.2}% {:>8}",
        r.ticker,
        r.reversal,
        r.momentum,
        r.alpha_score,
        r.close,
        r.change,
        r.change_percent,
        r.signal.as_str().to_uppercase()
    )
}
