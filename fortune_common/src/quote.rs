//! Price quote model and decoding of the `simple/price` response.
//!
//! The endpoint answers with a map from coin identifier to an object holding
//! the price in the quote currency and, when requested, its 24 hour change:
//!
//! ```json
//! {"bitcoin": {"usd": 67187.34, "usd_24h_change": -1.2391}}
//! ```
//!
//! This module also provides the number formatting used by the view and the
//! share text.
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::coins::Coin;
use crate::error::FortuneError;

/// Quote currency requested from the endpoint. Fixed for the application.
pub const VS_CURRENCY: &str = "usd";

/// Price and 24 hour change for one coin at fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Coin the quote belongs to.
    pub coin: Coin,
    /// Current price in USD.
    pub usd: f64,
    /// Signed 24 hour change in percent, if the endpoint reported it.
    pub change_24h: Option<f64>,
    /// When the quote was received.
    pub fetched_at: DateTime<Utc>,
}

/// Per-coin entry of the `simple/price` response.
#[derive(Debug, Deserialize)]
struct SimplePriceEntry {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

impl PriceQuote {
    /// Decode a `simple/price` response body into a quote for `coin`.
    ///
    /// Fails with `MalformedQuote` when the coin entry or its `usd` field is
    /// missing, and with `SerdeJson` when the body is not the expected shape.
    pub fn from_simple_price(coin: Coin, body: &[u8]) -> Result<PriceQuote, FortuneError> {
        let mut parsed: HashMap<String, SimplePriceEntry> = serde_json::from_slice(body)?;
        let entry = parsed
            .remove(coin.id())
            .ok_or_else(|| FortuneError::MalformedQuote {
                coin: coin.id().to_string(),
                reason: "coin missing from response".to_string(),
            })?;
        let usd = entry.usd.ok_or_else(|| FortuneError::MalformedQuote {
            coin: coin.id().to_string(),
            reason: format!("{} price missing", VS_CURRENCY),
        })?;

        Ok(PriceQuote {
            coin,
            usd,
            change_24h: entry.usd_24h_change,
            fetched_at: Utc::now(),
        })
    }

    /// Price with a dollar sign and thousands separators, e.g. `$67,187.34`.
    pub fn price_label(&self) -> String {
        format!("${}", format_usd(self.usd))
    }

    /// 24 hour change with two decimals and a percent sign, e.g. `-1.24%`.
    pub fn change_label(&self) -> String {
        match self.change_24h {
            Some(change) => format!("{:.2}%", change),
            None => "n/a".to_string(),
        }
    }

    /// `true` when the 24 hour change is known and negative.
    pub fn is_down(&self) -> bool {
        self.change_24h.is_some_and(|c| c < 0.0)
    }
}

/// Format a USD amount with thousands separators.
///
/// Amounts of one dollar or more get two decimals; smaller amounts keep up
/// to six decimals with trailing zeros removed, so cheap coins stay readable.
pub fn format_usd(amount: f64) -> String {
    let raw = if amount.abs() >= 1.0 {
        format!("{:.2}", amount)
    } else {
        let fixed = format!("{:.6}", amount);
        let trimmed = fixed.trim_end_matches('0');
        match trimmed.strip_suffix('.') {
            Some(whole) => format!("{}.00", whole),
            None => trimmed.to_string(),
        }
    };

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
