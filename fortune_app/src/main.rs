//! Crypto Fortune: an interactive terminal app that shows the current price of
//! a selected cryptocurrency next to a randomly drawn fortune cookie.
//!
//! Prices come from the CoinGecko `simple/price` endpoint; fortunes come from
//! the list bundled with `fortune_common` or from a text file. The current
//! fortune can be shared through a native share command or copied to the
//! terminal clipboard.
//!
//! Usage example (CLI):
//! ```bash
//! crypto_fortune --coin eth --fortunes ./fortunes.txt
//! ```
//!
//! Commands are typed at the prompt; type `help` to list them.
#![warn(missing_docs)]
mod app;
mod args;
mod command;
mod fetcher;
mod share;
mod state;
mod view;

use crate::app::{App, InputEvent};
use crate::args::Args;
use crate::fetcher::CoinGeckoClient;
use crate::share::Sharer;
use clap::Parser;
use crossbeam_channel::{Sender, unbounded};
use fortune_common::FortuneBook;
use fortune_common::FortuneError;
use fortune_common::Result;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), FortuneError> {
    init_logger();
    let args = Args::parse();

    let book = load_fortunes(args.fortunes.as_deref())?;
    info!("Loaded {} fortunes", book.count());
    let source = CoinGeckoClient::new(&args.api_url)?;
    info!("Price API: {}", args.api_url);

    let (input_tx, input_rx) = unbounded::<InputEvent>();
    {
        let input_tx = input_tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down...");
            let _ = input_tx.send(InputEvent::Interrupt);
        })
        .map_err(|e| FortuneError::Io(io::Error::other(e.to_string())))?;
    }
    start_input_reader(input_tx);

    let mut app = App::new(
        args.coin,
        book,
        Arc::new(source),
        Sharer::new(args.share_command),
        StdRng::from_os_rng(),
        io::stdout(),
    );
    app.run(input_rx)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

/// Forward stdin lines to the event loop from a background thread.
fn start_input_reader(tx: Sender<InputEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(InputEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    debug!("Stdin read error: {}", e);
                    break;
                }
            }
        }
        let _ = tx.send(InputEvent::Eof);
    });
}

/// Bundled fortunes, or the ones in `path` when given.
fn load_fortunes(path: Option<&str>) -> Result<FortuneBook> {
    let Some(raw) = path else {
        return FortuneBook::bundled();
    };

    let file_path = normalize_path(raw);
    if !is_file_exist(&file_path) {
        return Err(FortuneError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("fortunes file not found: {}", file_path.display()),
        )));
    }
    let file = File::open(&file_path)?;
    FortuneBook::parse_from_file(BufReader::new(file))
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
