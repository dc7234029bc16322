//! Form input and its validated counterpart.
//!
//! `QuoteForm` holds exactly what the user typed or selected. `QuoteForm::validate`
//! checks every field, collecting all failures into one `ValidationError`, and only then
//! produces a `QuoteRequest` the calculator can trust.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::{CryptoAsset, FiatCurrency};
use crate::error::{Field, FieldError, ValidationError};

/// Message for an amount that is not a positive finite number.
pub const AMOUNT_MESSAGE: &str = "Amount must be a positive number";

/// Raw, unvalidated form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteForm {
    /// Source currency code.
    pub from_currency: String,
    /// Destination currency code.
    pub to_currency: String,
    /// Amount as typed.
    pub amount: String,
    /// Target crypto asset code.
    pub crypto_currency: String,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            from_currency: FiatCurrency::USD.to_string(),
            to_currency: FiatCurrency::EUR.to_string(),
            amount: String::new(),
            crypto_currency: CryptoAsset::BTC.to_string(),
        }
    }
}

impl QuoteForm {
    /// Default selections with the given amount text.
    pub fn with_amount(amount: &str) -> Self {
        Self {
            amount: amount.to_string(),
            ..Self::default()
        }
    }

    /// Validate every field and build a `QuoteRequest`.
    ///
    /// Fails with all field errors at once when any field is invalid.
    pub fn validate(&self) -> Result<QuoteRequest, ValidationError> {
        let mut errors = Vec::new();

        let source = parse_selection::<FiatCurrency>(
            &self.from_currency,
            Field::FromCurrency,
            "From currency is required",
            "Unsupported currency",
            &mut errors,
        );
        let destination = parse_selection::<FiatCurrency>(
            &self.to_currency,
            Field::ToCurrency,
            "To currency is required",
            "Unsupported currency",
            &mut errors,
        );
        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            errors.push(FieldError {
                field: Field::Amount,
                message: AMOUNT_MESSAGE.to_string(),
            });
        }
        let asset = parse_selection::<CryptoAsset>(
            &self.crypto_currency,
            Field::CryptoCurrency,
            "Cryptocurrency is required",
            "Unsupported cryptocurrency",
            &mut errors,
        );

        match (source, destination, amount, asset) {
            (Some(source), Some(destination), Some(amount), Some(asset)) => Ok(QuoteRequest {
                source,
                destination,
                amount,
                amount_text: self.amount.trim().to_string(),
                asset,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

/// Parse a required selector value, recording a field error on failure.
fn parse_selection<T: FromStr>(
    raw: &str,
    field: Field,
    required: &str,
    unsupported: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError {
            field,
            message: required.to_string(),
        });
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: format!("{}: {}", unsupported, value),
            });
            None
        }
    }
}

/// A finite number strictly greater than zero, or `None`.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Validated input for one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Currency the amount is expressed in.
    pub source: FiatCurrency,
    /// Currency the amount is converted to.
    pub destination: FiatCurrency,
    /// Positive finite amount in `source`.
    pub amount: f64,
    /// Amount as the user typed it, trimmed. Echoed back in notifications.
    pub amount_text: String,
    /// Crypto asset the converted amount is estimated in.
    pub asset: CryptoAsset,
}

impl QuoteRequest {
    /// Build a request directly from typed values; `amount_text` is the shortest
    /// rendering of `amount`.
    pub fn new(
        source: FiatCurrency,
        destination: FiatCurrency,
        amount: f64,
        asset: CryptoAsset,
    ) -> Self {
        Self {
            source,
            destination,
            amount,
            amount_text: amount.to_string(),
            asset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(from: &str, to: &str, amount: &str, crypto: &str) -> QuoteForm {
        QuoteForm {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            amount: amount.to_string(),
            crypto_currency: crypto.to_string(),
        }
    }

    #[test]
    fn defaults_match_the_form() {
        let form = QuoteForm::default();
        assert_eq!(form.from_currency, "USD");
        assert_eq!(form.to_currency, "EUR");
        assert_eq!(form.amount, "");
        assert_eq!(form.crypto_currency, "BTC");
    }

    #[test]
    fn accepts_a_complete_form() {
        let request = form("USD", "EUR", "100", "BTC").validate().unwrap();
        assert_eq!(request.source, FiatCurrency::USD);
        assert_eq!(request.destination, FiatCurrency::EUR);
        assert_eq!(request.amount, 100.0);
        assert_eq!(request.asset, CryptoAsset::BTC);
    }

    #[test]
    fn accepts_padded_and_fractional_amounts() {
        let padded = QuoteForm::with_amount(" 12.50 ").validate().unwrap();
        assert_eq!(padded.amount, 12.5);
        assert_eq!(padded.amount_text, "12.50");

        let exponent = QuoteForm::with_amount("1e3").validate().unwrap();
        assert_eq!(exponent.amount, 1000.0);
        assert_eq!(exponent.amount_text, "1e3");
    }

    #[test]
    fn same_source_and_destination_is_allowed() {
        assert!(form("GBP", "GBP", "5", "ETH").validate().is_ok());
    }

    #[test]
    fn zero_amount_fails_on_amount_field() {
        let err = QuoteForm::with_amount("0").validate().unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.message_for(Field::Amount), Some(AMOUNT_MESSAGE));
    }

    #[test]
    fn non_numeric_amount_fails_on_amount_field() {
        let err = QuoteForm::with_amount("abc").validate().unwrap_err();
        assert_eq!(err.message_for(Field::Amount), Some(AMOUNT_MESSAGE));
    }

    #[test]
    fn rejects_negative_empty_and_non_finite_amounts() {
        for amount in ["-1", "", "   ", "inf", "NaN", "infinity", "1e400"] {
            let err = QuoteForm::with_amount(amount).validate().unwrap_err();
            assert!(err.has_field(Field::Amount), "amount {:?} should fail", amount);
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let err = form("", "", "x", "").validate().unwrap_err();
        let fields: Vec<Field> = err.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::FromCurrency,
                Field::ToCurrency,
                Field::Amount,
                Field::CryptoCurrency
            ]
        );
        assert_eq!(
            err.message_for(Field::FromCurrency),
            Some("From currency is required")
        );
        assert_eq!(
            err.message_for(Field::CryptoCurrency),
            Some("Cryptocurrency is required")
        );
    }

    #[test]
    fn unsupported_selections_are_field_scoped() {
        let err = form("CHF", "EUR", "10", "DOGE").validate().unwrap_err();
        assert_eq!(
            err.message_for(Field::FromCurrency),
            Some("Unsupported currency: CHF")
        );
        assert_eq!(
            err.message_for(Field::CryptoCurrency),
            Some("Unsupported cryptocurrency: DOGE")
        );
        assert!(!err.has_field(Field::Amount));
    }
}
