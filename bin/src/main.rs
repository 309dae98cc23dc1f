//! Confluence CLI binary.
//!
//! Scores a mock universe with the reversal-momentum factor.

mod cmd;
mod data;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confluence")]
#[command(about = "Short-term reversal x momentum alpha factor", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for mock price generation
    #[arg(long, global = true, env = "CONFLUENCE_SEED", default_value_t = 42)]
    seed: u64,

    /// Bars of history generated per ticker
    #[arg(long, global = true, env = "CONFLUENCE_DAYS", default_value_t = 30)]
    days: usize,

    /// Date of the last bar (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    end: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for batch scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Grouped tables
    Text,
    /// Results array in universe order
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ticker universe
    Tickers,

    /// List available factors and window statistics
    Factors {
        /// Show formulas and descriptions
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a single ticker
    Score {
        /// Ticker symbol
        ticker: String,

        /// Factor name or alias
        #[arg(short, long, default_value = "reversal_momentum")]
        factor: String,

        /// Percentile-rank both legs across the universe
        #[arg(long)]
        ranked: bool,
    },

    /// Score the whole universe, grouped by signal
    Scores {
        /// Factor name or alias
        #[arg(short, long, default_value = "reversal_momentum")]
        factor: String,

        /// Percentile-rank both legs across the universe
        #[arg(long)]
        ranked: bool,

        /// Keep going when a ticker fails and report it
        #[arg(long)]
        per_ticker: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the bar history for a ticker
    History {
        /// Ticker symbol
        ticker: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let end = cli.end.as_deref().map(data::parse_date).transpose()?;
    let source = data::DataSource::new(cli.seed, cli.days, end);
    debug!(seed = cli.seed, days = cli.days, end = %source.end(), "data source configured");

    match cli.command {
        Commands::Tickers => cmd::tickers::list_tickers(&source)?,
        Commands::Factors { verbose } => cmd::factors::list_factors(verbose),
        Commands::Score {
            ticker,
            factor,
            ranked,
        } => cmd::score::show_score(&source, &factor, &ticker, ranked)?,
        Commands::Scores {
            factor,
            ranked,
            per_ticker,
            format,
        } => cmd::score::show_scores(&source, &factor, ranked, per_ticker, format)?,
        Commands::History { ticker } => cmd::history::show_history(&source, &ticker)?,
    }

    Ok(())
}
