//! User commands typed at the prompt.
use std::str::FromStr;

use fortune_common::{Coin, FortuneError};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Select a coin and fetch its price.
    Select(Coin),
    /// Fetch the price of the selected coin again.
    Refresh,
    /// Open a fortune cookie.
    Open,
    /// Share or copy the current fortune.
    Share,
    /// List supported coins.
    Coins,
    /// Show the command summary.
    Help,
    /// Leave the application.
    Quit,
}

impl FromStr for UserCommand {
    type Err = FortuneError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();

        match (verb.as_str(), argument) {
            ("coin" | "select" | "c", Some(name)) => Coin::lookup(name).map(UserCommand::Select),
            ("refresh" | "r", None) => Ok(UserCommand::Refresh),
            ("open" | "o" | "cookie", None) => Ok(UserCommand::Open),
            ("share" | "s" | "copy", None) => Ok(UserCommand::Share),
            ("coins", None) => Ok(UserCommand::Coins),
            ("help" | "h" | "?", None) => Ok(UserCommand::Help),
            ("quit" | "q" | "exit", None) => Ok(UserCommand::Quit),
            // A bare coin name selects it.
            (word, None) => Coin::lookup(word)
                .map(UserCommand::Select)
                .map_err(|_| FortuneError::UnknownCommand(line.trim().to_string())),
            _ => Err(FortuneError::UnknownCommand(line.trim().to_string())),
        }
    }
}
