//! Quote data model and display helpers.
//!
//! A `Quote` is derived from one `QuoteRequest` and two coefficients drawn from a
//! `RateProvider`. It is never stored anywhere beyond the desk state and is replaced by
//! the next submission.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::rates::RateProvider;
use crate::request::QuoteRequest;

/// Computed result of a single submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Request the quote was computed for.
    pub request: QuoteRequest,
    /// Units of destination currency per unit of source currency.
    pub cross_rate: f64,
    /// `amount × cross_rate`, in destination currency.
    pub converted_amount: f64,
    /// Units of the crypto asset per unit of destination currency.
    pub crypto_rate: f64,
    /// `amount × cross_rate × crypto_rate`, in the crypto asset.
    pub crypto_amount: f64,
    /// UTC timestamp in milliseconds since Unix epoch.
    pub quoted_at: u64,
}

impl Quote {
    /// Compute a quote for `request`, drawing the cross rate first and the crypto rate second.
    pub fn compute<P: RateProvider + ?Sized>(request: QuoteRequest, rates: &mut P) -> Quote {
        let cross_rate = rates.cross_rate(request.source, request.destination);
        let crypto_rate = rates.crypto_rate(request.destination, request.asset);
        let converted_amount = request.amount * cross_rate;

        Quote {
            request,
            cross_rate,
            converted_amount,
            crypto_rate,
            crypto_amount: converted_amount * crypto_rate,
            quoted_at: Utc::now().timestamp_millis() as u64,
        }
    }

    /// `100 USD = 93.21 EUR`
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {:.2} {}",
            self.request.amount_text,
            self.request.source,
            self.converted_amount,
            self.request.destination
        )
    }

    /// `1 USD = 0.9321 EUR`
    pub fn rate_line(&self) -> String {
        format!(
            "1 {} = {:.4} {}",
            self.request.source, self.cross_rate, self.request.destination
        )
    }

    /// `Converted Amount: 93.21 EUR`
    pub fn converted_line(&self) -> String {
        format!(
            "Converted Amount: {:.2} {}",
            self.converted_amount, self.request.destination
        )
    }

    /// `Estimated BTC Amount: 0.00004660`
    pub fn crypto_line(&self) -> String {
        format!(
            "Estimated {} Amount: {:.8}",
            self.request.asset, self.crypto_amount
        )
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ExchangeError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}
