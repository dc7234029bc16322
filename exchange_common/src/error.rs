//! Error types shared by the calculator and the desk front-end.
//!
//! `ExchangeError` unifies every failure the workspace can surface. Input problems are
//! carried by `ValidationError`, which is field-scoped so the front-end can print each
//! message next to the offending field.
use std::fmt;
use std::io;

use thiserror::Error;

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Source fiat currency selector.
    FromCurrency,
    /// Destination fiat currency selector.
    ToCurrency,
    /// Amount text input.
    Amount,
    /// Target crypto asset selector.
    CryptoCurrency,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FromCurrency => "from",
            Field::ToCurrency => "to",
            Field::Amount => "amount",
            Field::CryptoCurrency => "crypto",
        };
        f.write_str(name)
    }
}

/// A single message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: Field,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation for one submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// All field errors in form order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if that field failed.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns `true` if `field` is among the failed fields.
    pub fn has_field(&self, field: Field) -> bool {
        self.message_for(field).is_some()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Unified error type for the exchange desk.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The submitted form did not pass validation; no quote was produced.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A purchase was requested before any quote was calculated.
    #[error("No quote available: calculate an exchange first")]
    NoQuote,

    /// I/O error from the standard library (stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Generic formatting error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
