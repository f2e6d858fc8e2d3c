//! Delivery of the share text.
//!
//! A configured native share command receives the text on its stdin; any
//! failure there is swallowed. Without one, the text goes to the terminal
//! clipboard through an OSC 52 escape sequence and the user is told so.
use std::io::Write;
use std::process::{Command, Stdio};

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use log::debug;

/// Notice printed after a clipboard copy.
pub const COPIED_NOTICE: &str = "Copied fortune to clipboard!";

/// What happened to a share request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share command accepted the text.
    Shared,
    /// The text was copied to the clipboard.
    Copied,
    /// The native share command failed or was declined; nothing is reported.
    Ignored,
}

/// Share surface: an optional native command with a clipboard fallback.
#[derive(Debug, Clone, Default)]
pub struct Sharer {
    command: Option<String>,
}

impl Sharer {
    /// `command` is a program plus whitespace-separated arguments.
    pub fn new(command: Option<String>) -> Self {
        let command = command
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Self { command }
    }

    /// Deliver `text`, writing any clipboard sequence and notice to `out`.
    pub fn deliver<W: Write>(&self, text: &str, out: &mut W) -> ShareOutcome {
        match &self.command {
            Some(command) => match run_share_command(command, text) {
                Ok(()) => ShareOutcome::Shared,
                Err(e) => {
                    debug!("Share command `{}` declined: {}", command, e);
                    ShareOutcome::Ignored
                }
            },
            None => {
                if let Err(e) = copy_to_clipboard(text, out) {
                    debug!("Clipboard copy failed: {}", e);
                }
                ShareOutcome::Copied
            }
        }
    }
}

fn run_share_command(command: &str, text: &str) -> std::io::Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().unwrap_or_default();
    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // The child is always reaped, even when it closed its stdin early.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {}", status)))
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text))
}

fn copy_to_clipboard<W: Write>(text: &str, out: &mut W) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    writeln!(out, "{}", COPIED_NOTICE)?;
    out.flush()
}
