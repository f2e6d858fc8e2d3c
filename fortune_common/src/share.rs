//! Composition of the text handed to the share/copy action.
use crate::coins::Coin;
use crate::quote::PriceQuote;

/// Build the share text for the current fortune, coin, and quote.
///
/// The fortune and the coin symbol are embedded verbatim. Without a quote the
/// price part reads `price unknown`; without a 24 hour change only the price
/// is given.
pub fn compose_share_text(coin: Coin, fortune: &str, quote: Option<&PriceQuote>) -> String {
    let price = match quote {
        Some(q) if q.change_24h.is_some() => {
            format!("{} ({} 24h)", q.price_label(), q.change_label())
        }
        Some(q) => q.price_label(),
        None => "price unknown".to_string(),
    };
    format!(
        "🔮 Crypto Fortune for {}: {} — Current: {}",
        coin.symbol(),
        fortune,
        price
    )
}
