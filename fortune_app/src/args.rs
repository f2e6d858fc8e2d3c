//! Command-line arguments for the fortune application.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use fortune_common::Coin;

use crate::fetcher::CoinGeckoClient;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Coin selected at startup (identifier or symbol).
    #[clap(long, value_enum, ignore_case = true, default_value_t = Coin::Bitcoin)]
    pub coin: Coin,

    /// Root of the price API; `/simple/price` is appended.
    #[clap(long, default_value = CoinGeckoClient::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Path to a text file with one fortune per line, replacing the bundled list.
    #[clap(long)]
    pub fortunes: Option<String>,

    /// Program that receives the share text on stdin. Without it the text is
    /// copied to the terminal clipboard.
    #[clap(long)]
    pub share_command: Option<String>,
}
