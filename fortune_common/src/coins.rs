//! Supported coins shared between the price fetcher and the UI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::FortuneError;

/// Set of supported coins.
///
/// `Display` yields the CoinGecko identifier; parsing accepts the identifier
/// or the ticker symbol, ignoring ASCII case.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Coin {
    /// Bitcoin (BTC).
    #[default]
    #[strum(to_string = "bitcoin", serialize = "btc")]
    #[value(alias = "btc")]
    Bitcoin,
    /// Ethereum (ETH).
    #[strum(to_string = "ethereum", serialize = "eth")]
    #[value(alias = "eth")]
    Ethereum,
    /// Solana (SOL).
    #[strum(to_string = "solana", serialize = "sol")]
    #[value(alias = "sol")]
    Solana,
    /// Cardano (ADA).
    #[strum(to_string = "cardano", serialize = "ada")]
    #[value(alias = "ada")]
    Cardano,
    /// Dogecoin (DOGE).
    #[strum(to_string = "dogecoin", serialize = "doge")]
    #[value(alias = "doge")]
    Dogecoin,
}

impl Coin {
    /// Identifier used by the price endpoint (e.g., `bitcoin`).
    pub fn id(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Solana => "solana",
            Coin::Cardano => "cardano",
            Coin::Dogecoin => "dogecoin",
        }
    }

    /// Ticker symbol shown to the user (e.g., `BTC`).
    pub fn symbol(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Ethereum => "ETH",
            Coin::Solana => "SOL",
            Coin::Cardano => "ADA",
            Coin::Dogecoin => "DOGE",
        }
    }

    /// All supported coins in display order.
    pub fn all() -> Vec<Coin> {
        Coin::iter().collect()
    }

    /// Parse user input naming a coin by identifier or symbol.
    pub fn lookup(raw: &str) -> Result<Coin, FortuneError> {
        let trimmed = raw.trim();
        trimmed
            .parse::<Coin>()
            .map_err(|_| FortuneError::UnknownCoin(trimmed.to_string()))
    }
}
