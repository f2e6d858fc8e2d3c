//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `FortuneError`, so functions can simply return `Result<T>`.
use crate::error::FortuneError;

/// Workspace-wide `Result` alias with `FortuneError` as the default error.
pub type Result<T, E = FortuneError> = std::result::Result<T, E>;
