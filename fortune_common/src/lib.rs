//!
//! Domain types shared by the crypto fortune application.
//!
//! This crate aggregates:
//! - `error`: unified error type `FortuneError` used across the workspace.
//! - `result`: handy `Result<T, FortuneError>` alias.
//! - `coins`: the fixed set of supported coins.
//! - `fortunes`: fortune lists and the uniform picker.
//! - `quote`: price quotes and decoding of the price endpoint response.
//! - `share`: composition of the share/copy text.
#![warn(missing_docs)]
pub mod coins;
pub mod error;
pub mod fortunes;
pub mod quote;
pub mod result;
pub mod share;

pub use coins::Coin;
pub use error::FortuneError;
pub use fortunes::FortuneBook;
pub use quote::PriceQuote;
pub use result::Result;
