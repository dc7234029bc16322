//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `ExchangeError`, so functions can simply return `Result<T>`.
use crate::error::ExchangeError;

/// Workspace-wide `Result` alias with `ExchangeError` as the default error.
pub type Result<T, E = ExchangeError> = std::result::Result<T, E>;
