//! Event loop tying input, fetches, and the shake timer together.
//!
//! One thread owns the `UiState` and handles one event at a time, multiplexed
//! with crossbeam `select!` over three sources:
//! - input lines forwarded by the stdin reader (and Ctrl+C),
//! - fetch outcomes reported by `PriceFetcher` worker threads,
//! - the shake revert timer, re-armed on every cookie so it is debounced.
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, after, never, select, unbounded};
use fortune_common::{Coin, FortuneBook, FortuneError, Result};
use log::{debug, info};
use rand::rngs::StdRng;

use crate::command::UserCommand;
use crate::fetcher::{FetchOutcome, PriceFetcher, PriceSource};
use crate::share::{ShareOutcome, Sharer};
use crate::state::UiState;
use crate::view;

/// How long the shake cue stays on after opening a cookie.
pub const SHAKE_DURATION: Duration = Duration::from_millis(800);

/// Events produced outside the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// One line typed by the user.
    Line(String),
    /// Input closed.
    Eof,
    /// Ctrl+C.
    Interrupt,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive application state plus its collaborators.
pub struct App<W: Write> {
    state: UiState,
    book: FortuneBook,
    fetcher: PriceFetcher,
    outcomes: Receiver<FetchOutcome>,
    sharer: Sharer,
    rng: StdRng,
    out: W,
    shake_timer: Option<Receiver<Instant>>,
}

impl<W: Write> App<W> {
    /// Wire the application; nothing is fetched until `run` or `start`.
    pub fn new(
        coin: Coin,
        book: FortuneBook,
        source: Arc<dyn PriceSource>,
        sharer: Sharer,
        rng: StdRng,
        out: W,
    ) -> Self {
        let (outcome_tx, outcomes) = unbounded();
        Self {
            state: UiState::new(coin),
            book,
            fetcher: PriceFetcher::new(source, outcome_tx),
            outcomes,
            sharer,
            rng,
            out,
            shake_timer: None,
        }
    }

    /// Fetch the initial coin and handle events until the user quits or
    /// input ends.
    pub fn run(&mut self, input: Receiver<InputEvent>) -> Result<()> {
        self.start()?;
        let outcomes = self.outcomes.clone();

        loop {
            let shake_rx = self.shake_timer.clone().unwrap_or_else(never);
            select! {
                recv(input) -> msg => match msg {
                    Ok(InputEvent::Line(line)) => {
                        if self.handle_line(&line)? == Flow::Quit {
                            break;
                        }
                    }
                    Ok(InputEvent::Eof) | Ok(InputEvent::Interrupt) | Err(_) => break,
                },
                recv(outcomes) -> msg => match msg {
                    Ok(outcome) => self.handle_outcome(outcome)?,
                    Err(e) => return Err(FortuneError::ChannelRecv(e.to_string())),
                },
                recv(shake_rx) -> _ => self.end_shake()?,
            }
        }

        info!("Leaving the fortune shop");
        Ok(())
    }

    /// Issue the fetch for the initially selected coin and draw the view.
    pub fn start(&mut self) -> Result<()> {
        let request = self.state.select_coin(self.state.selected());
        self.fetcher.dispatch(request);
        self.render()
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match line.parse::<UserCommand>() {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                writeln!(self.out, "{}. Type \"help\" for commands.", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle_command(&mut self, command: UserCommand) -> Result<Flow> {
        match command {
            UserCommand::Select(coin) => {
                let request = self.state.select_coin(coin);
                self.fetcher.dispatch(request);
                self.render()?;
            }
            UserCommand::Refresh => {
                let request = self.state.refresh();
                self.fetcher.dispatch(request);
                self.render()?;
            }
            UserCommand::Open => {
                self.state.open_cookie(&self.book, &mut self.rng);
                self.shake_timer = Some(after(SHAKE_DURATION));
                self.render()?;
            }
            UserCommand::Share => {
                let text = self.state.share_text();
                match self.sharer.deliver(&text, &mut self.out) {
                    ShareOutcome::Shared => writeln!(self.out, "Shared.")?,
                    ShareOutcome::Copied | ShareOutcome::Ignored => {}
                }
            }
            UserCommand::Coins => writeln!(self.out, "{}", view::coin_list())?,
            UserCommand::Help => writeln!(self.out, "{}", view::help())?,
            UserCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_outcome(&mut self, outcome: FetchOutcome) -> Result<()> {
        if self.state.apply(outcome) {
            self.render()?;
        }
        Ok(())
    }

    fn end_shake(&mut self) -> Result<()> {
        self.shake_timer = None;
        self.state.stop_shaking();
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", view::render(&self.state))?;
        self.out.flush()?;
        Ok(())
    }
}
