//! CLI subcommand modules.
//!
//! This module contains the implementations for all confluence CLI subcommands.

pub(crate) mod factors;
pub(crate) mod history;
pub(crate) mod score;
pub(crate) mod tickers;
