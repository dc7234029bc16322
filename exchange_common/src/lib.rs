//!
//! Common types and the quote calculator behind the exchange desk.
//!
//! This crate aggregates:
//! - `error` — unified error type `ExchangeError` and field-scoped `ValidationError`.
//! - `result` — handy `Result<T, ExchangeError>` alias.
//! - `currency` — supported fiat currencies and crypto assets.
//! - `request` — raw form input and its validated `QuoteRequest`.
//! - `rates` — rate providers feeding the calculator (simulated or fixed).
//! - `quote` — the computed `Quote` and its display helpers.
//! - `notification` — title/description notifications and their sinks.
//! - `state` — `DeskState`, the Idle/Quoted display mode.
//! - `calculator` — `QuoteCalculator`, tying the pieces together.
#![warn(missing_docs)]
pub mod calculator;
pub mod currency;
pub mod error;
pub mod notification;
pub mod quote;
pub mod rates;
pub mod request;
pub mod result;
pub mod state;

pub use calculator::{PurchaseIntent, QuoteCalculator};
pub use error::{ExchangeError, Field, FieldError, ValidationError};
pub use quote::Quote;
pub use request::{QuoteForm, QuoteRequest};
pub use result::Result;
pub use state::DeskState;
