//! Error types shared between the domain crate and the application.
//!
//! The `FortuneError` enum unifies the failure cases for I/O, JSON decoding,
//! quote fetching, fortune loading, and channel communication, allowing crates
//! to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the domain crate and the application.
#[derive(Error, Debug)]
pub enum FortuneError {
    /// I/O error originating from the standard library, files, or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport-level failure of the HTTP client (connect, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The price endpoint answered with a non-success status code.
    #[error("Price endpoint returned status {0}")]
    Status(u16),

    /// The response body did not carry a usable quote for the requested coin.
    #[error("Malformed quote for {coin}: {reason}")]
    MalformedQuote {
        /// Coin identifier that was requested.
        coin: String,
        /// Short description of what was missing.
        reason: String,
    },

    /// A fortune list contained no entries.
    #[error("Fortune list is empty")]
    EmptyFortunes,

    /// A fortune list contained a blank entry at the given position.
    #[error("Fortune #{0} is blank")]
    BlankFortune(usize),

    /// The given text does not name a supported coin.
    #[error("Unknown coin: {0}")]
    UnknownCoin(String),

    /// The given input line is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}
