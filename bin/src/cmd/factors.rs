//! Factors command implementation.

use confluence_factors::registry::{available_factors, factors_by_category};
use confluence_factors::{DEFAULT_BUY_THRESHOLD, DEFAULT_SELL_THRESHOLD, FactorCategory};

/// List available factors grouped by category.
pub(crate) fn list_factors(verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Factors                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let categories = [
        (FactorCategory::Reversion, "Reversion"),
        (FactorCategory::Momentum, "Momentum"),
        (FactorCategory::Composite, "Composite"),
    ];

    for (cat, cat_name) in categories {
        let factors = factors_by_category(&cat);
        if factors.is_empty() {
            continue;
        }

        println!("{cat_name}:");
        println!("{}", "-".repeat(60));

        for factor in factors {
            if verbose {
                println!("  {:25} - {}", factor.name, factor.description);
                println!("  {:25}   {} (lookback: {} bars)", "", factor.formula, factor.lookback);
            } else {
                println!("  {}", factor.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for formulas and descriptions.\n");
    }

    println!("Factor aliases:");
    println!("  alpha, revmom  -> reversal_momentum   (score/scores --factor <NAME>)");
    println!();
    println!(
        "Signals: buy when alpha > {DEFAULT_BUY_THRESHOLD}, sell when alpha < {DEFAULT_SELL_THRESHOLD}"
    );
    println!("{} factors registered.", available_factors().len());
}
