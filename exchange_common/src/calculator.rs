//! Quote calculator.
//!
//! `QuoteCalculator` validates a submitted form, derives a `Quote` from the injected
//! `RateProvider`, announces it through the `NotificationSink`, and keeps it as the
//! current `DeskState`. Every successful submission replaces the previous quote; a
//! failed one leaves the state exactly as it was.
//!
//! The purchase action is a placeholder: it announces the purchase of the quoted crypto
//! amount and reports what would be bought, without performing any transaction.

use log::{debug, info, warn};
use serde::Serialize;

use crate::currency::CryptoAsset;
use crate::error::ExchangeError;
use crate::notification::{Notification, NotificationSink};
use crate::quote::Quote;
use crate::rates::RateProvider;
use crate::request::{QuoteForm, QuoteRequest};
use crate::state::DeskState;

/// What the purchase placeholder would buy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurchaseIntent {
    /// Asset of the current quote.
    pub asset: CryptoAsset,
    /// Crypto amount of the current quote.
    pub crypto_amount: f64,
}

/// Validates submissions and holds the latest quote.
pub struct QuoteCalculator<P, S> {
    rates: P,
    sink: S,
    state: DeskState,
}

impl<P: RateProvider, S: NotificationSink> QuoteCalculator<P, S> {
    /// Create an idle calculator.
    pub fn new(rates: P, sink: S) -> Self {
        Self {
            rates,
            sink,
            state: DeskState::Idle,
        }
    }

    /// Validate `form` and calculate a quote from it.
    pub fn submit(&mut self, form: &QuoteForm) -> Result<&Quote, ExchangeError> {
        debug!("Submission: {:?}", form);
        let request = form.validate().inspect_err(|e| {
            warn!("Submission rejected: {}", e);
        })?;
        self.calculate(request)
    }

    /// Calculate a quote for an already validated request and make it current.
    pub fn calculate(&mut self, request: QuoteRequest) -> Result<&Quote, ExchangeError> {
        let quote = Quote::compute(request, &mut self.rates);
        info!(
            "Quote: {} (cross rate {:.6}, crypto rate {:.8})",
            quote.summary(),
            quote.cross_rate,
            quote.crypto_rate
        );
        self.sink.notify(Notification::exchange_calculated(&quote))?;
        self.state.show(quote);
        self.state.quote().ok_or(ExchangeError::NoQuote)
    }

    /// Announce a purchase of the current quote's crypto amount.
    pub fn purchase(&self) -> Result<PurchaseIntent, ExchangeError> {
        let quote = self.state.quote().ok_or(ExchangeError::NoQuote)?;
        let intent = PurchaseIntent {
            asset: quote.request.asset,
            crypto_amount: quote.crypto_amount,
        };
        info!(
            "Purchase requested: {:.8} {}",
            intent.crypto_amount, intent.asset
        );
        self.sink.notify(Notification::purchase_initiated())?;
        Ok(intent)
    }

    /// Current display mode.
    pub fn state(&self) -> &DeskState {
        &self.state
    }

    /// The current quote, if any.
    pub fn quote(&self) -> Option<&Quote> {
        self.state.quote()
    }

    /// Drop the current quote and return to idle.
    pub fn reset(&mut self) {
        debug!("Desk reset");
        self.state.reset();
    }
}
