//! Score command implementations.

use crate::OutputFormat;
use crate::data::DataSource;
use crate::report::{self, SignalGroups};
use anyhow::Result;
use confluence_data::BarStore;
use confluence_eval::{Evaluator, EvaluatorConfig, ScoringMode, SignalSummary};
use confluence_factors::ReversalMomentum;
use confluence_factors::registry::create_factor;
use confluence_traits::FactorResult;

fn config(ranked: bool) -> EvaluatorConfig {
    EvaluatorConfig {
        mode: if ranked {
            ScoringMode::CrossSectionalRank
        } else {
            ScoringMode::Raw
        },
        parallel: true,
        ..Default::default()
    }
}

/// Resolve `factor` through the registry and bind it to the mock store.
fn evaluator(
    source: &DataSource,
    factor: &str,
    ranked: bool,
) -> Result<Evaluator<BarStore, ReversalMomentum>> {
    let factor = create_factor(factor)?;
    Ok(Evaluator::with_factor(source.store()?, factor, config(ranked)))
}

/// Score one ticker.
pub(crate) fn show_score(
    source: &DataSource,
    factor: &str,
    ticker: &str,
    ranked: bool,
) -> Result<()> {
    let evaluator = evaluator(source, factor, ranked)?;
    let result = evaluator.evaluate(ticker)?;

    println!("{}", report::header());
    println!("{}", "─".repeat(report::header().len()));
    println!("{}", report::row(&result));
    Ok(())
}

/// Score the whole universe.
pub(crate) fn show_scores(
    source: &DataSource,
    factor: &str,
    ranked: bool,
    per_ticker: bool,
    format: OutputFormat,
) -> Result<()> {
    let evaluator = evaluator(source, factor, ranked)?;

    let results: Vec<FactorResult> = if per_ticker {
        let mut ok = Vec::new();
        for outcome in evaluator.evaluate_each() {
            match outcome.result {
                Ok(r) => ok.push(r),
                Err(e) => eprintln!("skipped {}: {e}", outcome.ticker),
            }
        }
        ok
    } else {
        evaluator.evaluate_all()?
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => print_grouped(&results, ranked),
    }
    Ok(())
}

fn print_grouped(results: &[FactorResult], ranked: bool) {
    let summary = SignalSummary::from_results(results);
    let SignalGroups {
        buys,
        sells,
        neutrals,
    } = report::group_by_signal(results);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Reversal x Momentum Scores                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for (title, group) in [("BUY", buys), ("SELL", sells), ("NEUTRAL", neutrals)] {
        println!("{title} ({})", group.len());
        println!("{}", report::header());
        println!("{}", "─".repeat(report::header().len()));
        for r in group {
            println!("{}", report::row(r));
        }
        println!();
    }

    println!(
        "{} tickers: {} buy, {} sell, {} neutral",
        summary.total, summary.buy, summary.sell, summary.neutral
    );
    if ranked {
        println!("Ranked scores lie in [-1, 0); the default buy threshold is never reached.");
    }
}
