//! Display mode of the desk.
//!
//! ```text
//! Idle --submit ok--> Quoted --submit ok--> Quoted (previous quote replaced)
//!   ^                   |
//!   +------reset--------+
//! ```
//!
//! A failed submission never changes the state.

use crate::quote::Quote;

/// Whether a quote is currently on display.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeskState {
    /// Nothing calculated yet.
    #[default]
    Idle,
    /// A quote is displayed and the purchase action is available.
    Quoted(Quote),
}

impl DeskState {
    /// The displayed quote, if any.
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            DeskState::Idle => None,
            DeskState::Quoted(quote) => Some(quote),
        }
    }

    /// Returns `true` while a quote is displayed.
    pub fn is_quoted(&self) -> bool {
        matches!(self, DeskState::Quoted(_))
    }

    /// Replace whatever is displayed with `quote`.
    pub fn show(&mut self, quote: Quote) {
        *self = DeskState::Quoted(quote);
    }

    /// Back to `Idle`, dropping any displayed quote.
    pub fn reset(&mut self) {
        *self = DeskState::Idle;
    }
}
