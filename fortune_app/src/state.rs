//! In-memory UI state and its transitions.
//!
//! The state is owned by the event loop and changed only through the methods
//! below. Every fetch is issued through `select_coin` or `refresh`, which hand
//! out a fresh `FetchRequest`; `apply` accepts only the outcome of the most
//! recent one, so a slow response for a coin the user already left never
//! overwrites the display.
use fortune_common::share::compose_share_text;
use fortune_common::{Coin, FortuneBook, PriceQuote};
use log::debug;
use rand::Rng;

use crate::fetcher::{FetchOutcome, FetchRequest};

/// Message shown for every kind of quote fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch price, try again later.";

/// Fortune text shown before the first cookie is opened.
pub const INITIAL_FORTUNE: &str = "Type \"open\" to reveal your crypto fortune!";

/// Transient state rendered by the view.
#[derive(Debug)]
pub struct UiState {
    selected: Coin,
    quote: Option<PriceQuote>,
    loading: bool,
    error: Option<String>,
    fortune: String,
    shaking: bool,
    last_issued: u64,
    awaiting: Option<u64>,
}

impl UiState {
    /// Fresh state with `selected` chosen and nothing fetched yet.
    pub fn new(selected: Coin) -> Self {
        Self {
            selected,
            quote: None,
            loading: false,
            error: None,
            fortune: INITIAL_FORTUNE.to_string(),
            shaking: false,
            last_issued: 0,
            awaiting: None,
        }
    }

    /// Switch to `coin` and issue a fetch for it.
    ///
    /// A quote for a different coin is dropped right away.
    pub fn select_coin(&mut self, coin: Coin) -> FetchRequest {
        if coin != self.selected {
            self.quote = None;
        }
        self.selected = coin;
        self.issue()
    }

    /// Issue a new fetch for the selected coin.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    fn issue(&mut self) -> FetchRequest {
        self.last_issued += 1;
        self.awaiting = Some(self.last_issued);
        self.loading = true;
        self.error = None;
        FetchRequest {
            id: self.last_issued,
            coin: self.selected,
        }
    }

    /// Apply a fetch outcome. Returns `false` if it was stale and ignored.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.awaiting != Some(outcome.request.id) || outcome.request.coin != self.selected {
            debug!(
                "Discarding stale outcome #{} for {} (awaiting {:?})",
                outcome.request.id, outcome.request.coin, self.awaiting
            );
            return false;
        }

        self.awaiting = None;
        self.loading = false;
        match outcome.result {
            Ok(quote) => {
                self.quote = Some(quote);
                self.error = None;
            }
            Err(_) => {
                self.quote = None;
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Replace the fortune with a random pick from `book` and start shaking.
    pub fn open_cookie<R: Rng>(&mut self, book: &FortuneBook, rng: &mut R) -> &str {
        self.fortune = book.pick(rng).to_string();
        self.shaking = true;
        &self.fortune
    }

    /// Revert the shake cue.
    pub fn stop_shaking(&mut self) {
        self.shaking = false;
    }

    /// Text for the share/copy action.
    pub fn share_text(&self) -> String {
        compose_share_text(self.selected, &self.fortune, self.quote.as_ref())
    }

    /// Currently selected coin.
    pub fn selected(&self) -> Coin {
        self.selected
    }

    /// Latest quote, if the last fetch succeeded.
    pub fn quote(&self) -> Option<&PriceQuote> {
        self.quote.as_ref()
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing error of the last fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Displayed fortune.
    pub fn fortune(&self) -> &str {
        &self.fortune
    }

    /// Whether the shake cue is active.
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }
}
