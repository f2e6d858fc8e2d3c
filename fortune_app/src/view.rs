//! Plain-text rendering of the UI state.
use fortune_common::Coin;

use crate::state::UiState;

/// Title line of the view.
pub const TITLE: &str = "=== Crypto Fortune Cookie ===";

/// Render the full view for `state`.
pub fn render(state: &UiState) -> String {
    let coin = state.selected();
    let fortune = if state.is_shaking() {
        format!("~ ~ {} ~ ~", state.fortune())
    } else {
        state.fortune().to_string()
    };

    [
        TITLE.to_string(),
        format!("Coin:    {} ({})", coin.symbol(), coin.id()),
        format!("Price:   {}", price_line(state)),
        String::new(),
        format!("  {}", fortune),
        String::new(),
        "[open] cookie  [share]  [coin <symbol>]  [refresh]  [help]  [quit]".to_string(),
    ]
    .join("\n")
}

fn price_line(state: &UiState) -> String {
    if state.is_loading() {
        return "Loading...".to_string();
    }
    if let Some(error) = state.error() {
        return error.to_string();
    }
    match state.quote() {
        Some(quote) => {
            let arrow = if quote.is_down() { '▼' } else { '▲' };
            format!(
                "{}  {} {}  (as of {} UTC)",
                quote.price_label(),
                arrow,
                quote.change_label(),
                quote.fetched_at.format("%H:%M:%S")
            )
        }
        None => "No data".to_string(),
    }
}

/// Supported coins, one per line.
pub fn coin_list() -> String {
    Coin::all()
        .iter()
        .map(|c| format!("  {:<5} {}", c.symbol(), c.id()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Command summary.
pub fn help() -> String {
    [
        "Commands:",
        "  coin <id|symbol>   select a coin and fetch its price (a bare symbol works too)",
        "  refresh | r        fetch the price again",
        "  open | o           open a fortune cookie",
        "  share | s          share or copy the fortune",
        "  coins              list supported coins",
        "  quit | q           leave",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchOutcome;
    use crate::state::FETCH_ERROR_MESSAGE;
    use chrono::Utc;
    use fortune_common::{FortuneError, PriceQuote};

    #[test]
    fn shows_no_data_before_any_fetch() {
        let view = render(&UiState::new(Coin::Bitcoin));
        assert!(view.contains("Coin:    BTC (bitcoin)"));
        assert!(view.contains("Price:   No data"));
    }

    #[test]
    fn shows_loading_while_fetching() {
        let mut state = UiState::new(Coin::Solana);
        state.refresh();
        assert!(render(&state).contains("Price:   Loading..."));
    }

    #[test]
    fn shows_price_with_direction() {
        let mut state = UiState::new(Coin::Bitcoin);
        let request = state.refresh();
        state.apply(FetchOutcome {
            request,
            result: Ok(PriceQuote {
                coin: Coin::Bitcoin,
                usd: 67187.34,
                change_24h: Some(-1.5),
                fetched_at: Utc::now(),
            }),
        });

        let view = render(&state);
        assert!(view.contains("$67,187.34  ▼ -1.50%"));
        assert!(!view.contains(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn shows_generic_error_instead_of_price() {
        let mut state = UiState::new(Coin::Bitcoin);
        let request = state.refresh();
        state.apply(FetchOutcome {
            request,
            result: Err(FortuneError::Status(500)),
        });

        let view = render(&state);
        assert!(view.contains(FETCH_ERROR_MESSAGE));
        assert!(!view.contains('$'));
    }

    #[test]
    fn coin_list_names_every_coin() {
        let list = coin_list();
        for coin in Coin::all() {
            assert!(list.contains(coin.symbol()));
            assert!(list.contains(coin.id()));
        }
    }
}
