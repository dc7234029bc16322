//! Line-oriented front-end for the quote calculator.
//!
//! Renders quotes and validation errors to a writer and, in interactive mode, reads
//! commands from a buffered reader:
//!
//! - `quote <amount> [from] [to] [crypto]` — submit the form (missing selections fall back
//!   to the defaults given on the command line). A bare amount works too.
//! - `buy` — initiate a purchase of the current quote.
//! - `state` — show whether a quote is displayed.
//! - `reset` — drop the current quote.
//! - `help` — list the supported currencies and crypto assets.
//! - `quit` / `exit` — leave.
//!
//! One-shot mode (`run_once`) submits a single form and optionally purchases. In JSON
//! format it writes exactly one document for the whole run.
use exchange_common::calculator::PurchaseIntent;
use exchange_common::currency::{CryptoAsset, FiatCurrency};
use exchange_common::notification::NotificationSink;
use exchange_common::rates::RateProvider;
use exchange_common::{DeskState, ExchangeError, Quote, QuoteCalculator, QuoteForm, Result};
use log::debug;
use serde::Serialize;
use std::io::{BufRead, Write};

/// How quotes are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable result block.
    Text,
    /// One JSON document per line.
    Json,
}

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskCommand {
    /// Submit the form with the given fields; `None` means "use the default".
    Quote {
        amount: String,
        from: Option<String>,
        to: Option<String>,
        crypto: Option<String>,
    },
    /// Initiate a purchase.
    Buy,
    /// Print the state.
    State,
    /// Back to idle.
    Reset,
    /// List what can be selected.
    Help,
    /// Leave the loop.
    Quit,
}

impl DeskCommand {
    /// Parse one input line. Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<DeskCommand>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "quote" => {
                let amount = words.next().ok_or_else(|| {
                    ExchangeError::Format("usage: quote <amount> [from] [to] [crypto]".to_string())
                })?;
                Self::quote(amount, words)
            }
            "buy" | "purchase" => DeskCommand::Buy,
            "state" => DeskCommand::State,
            "reset" => DeskCommand::Reset,
            "help" | "?" => DeskCommand::Help,
            "quit" | "exit" => DeskCommand::Quit,
            _ if head.parse::<f64>().is_ok() => Self::quote(head, words),
            other => return Err(ExchangeError::Format(format!("unknown command: {}", other))),
        };
        Ok(Some(command))
    }

    fn quote<'a>(amount: &str, mut rest: impl Iterator<Item = &'a str>) -> DeskCommand {
        DeskCommand::Quote {
            amount: amount.to_string(),
            from: rest.next().map(str::to_string),
            to: rest.next().map(str::to_string),
            crypto: rest.next().map(str::to_string),
        }
    }
}

/// Write the result block (or JSON) for `quote`.
pub fn write_quote<W: Write>(out: &mut W, quote: &Quote, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            out.write_all(&quote.to_json_bytes()?)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Exchange Result")?;
            writeln!(out, "  {}", quote.rate_line())?;
            writeln!(out, "  {}", quote.converted_line())?;
            writeln!(out, "  {}", quote.crypto_line())?;
        }
    }
    Ok(())
}

/// Write what the purchase placeholder would buy.
pub fn write_purchase<W: Write>(
    out: &mut W,
    intent: &PurchaseIntent,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, intent)?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(
            out,
            "Purchase of {:.8} {} ({}) initiated",
            intent.crypto_amount,
            intent.asset,
            intent.asset.name()
        )?,
    }
    Ok(())
}

/// Supported selections, one selector per line.
pub fn write_help<W: Write>(out: &mut W) -> Result<()> {
    let fiat: Vec<String> = FiatCurrency::ALL.iter().map(ToString::to_string).collect();
    let crypto: Vec<String> = CryptoAsset::ALL.iter().map(CryptoAsset::label).collect();
    writeln!(out, "currencies: {}", fiat.join(", "))?;
    writeln!(out, "crypto: {}", crypto.join(", "))?;
    writeln!(out, "commands: quote <amount> [from] [to] [crypto], buy, state, reset, quit")?;
    Ok(())
}

/// JSON document written by a one-shot run.
#[derive(Serialize)]
struct OneShotReport<'a> {
    quote: &'a Quote,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase: Option<PurchaseIntent>,
}

/// Submit `form` once and, if asked, purchase the resulting quote.
///
/// Validation errors are written next to their fields and end the run normally; no
/// purchase is attempted. Other errors are returned.
pub fn run_once<P, S, W>(
    calc: &mut QuoteCalculator<P, S>,
    form: &QuoteForm,
    purchase: bool,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    P: RateProvider,
    S: NotificationSink,
    W: Write,
{
    match calc.submit(form) {
        Ok(_) => {}
        Err(e @ ExchangeError::Validation(_)) => {
            write_error(out, &e)?;
            out.flush()?;
            return Ok(());
        }
        Err(e) => return Err(e),
    }
    let intent = if purchase {
        Some(calc.purchase()?)
    } else {
        None
    };
    let quote = calc.quote().ok_or(ExchangeError::NoQuote)?;

    match format {
        OutputFormat::Json => {
            let report = OneShotReport {
                quote,
                purchase: intent,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_quote(out, quote, format)?;
            if let Some(intent) = intent {
                write_purchase(out, &intent, format)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Write errors the way the form shows them: one line per offending field.
pub fn write_error<W: Write>(out: &mut W, err: &ExchangeError) -> Result<()> {
    match err {
        ExchangeError::Validation(validation) => {
            for field_error in validation.errors() {
                writeln!(out, "{}", field_error)?;
            }
        }
        other => writeln!(out, "error: {}", other)?,
    }
    Ok(())
}

/// Interactive loop over `input`, writing results to `out`.
///
/// Validation and command errors are reported and the loop continues; only I/O errors
/// on `input`/`out` end it early.
pub fn run_interactive<P, S, R, W>(
    calc: &mut QuoteCalculator<P, S>,
    defaults: &QuoteForm,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    P: RateProvider,
    S: NotificationSink,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match DeskCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write_error(out, &e)?;
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            DeskCommand::Quote {
                amount,
                from,
                to,
                crypto,
            } => {
                let form = QuoteForm {
                    from_currency: from.unwrap_or_else(|| defaults.from_currency.clone()),
                    to_currency: to.unwrap_or_else(|| defaults.to_currency.clone()),
                    amount,
                    crypto_currency: crypto.unwrap_or_else(|| defaults.crypto_currency.clone()),
                };
                match calc.submit(&form) {
                    Ok(quote) => write_quote(out, quote, format)?,
                    Err(e) => write_error(out, &e)?,
                }
            }
            DeskCommand::Buy => match calc.purchase() {
                Ok(intent) => write_purchase(out, &intent, format)?,
                Err(e) => write_error(out, &e)?,
            },
            DeskCommand::State => match calc.state() {
                DeskState::Idle => writeln!(out, "idle")?,
                DeskState::Quoted(quote) => writeln!(out, "quoted: {}", quote.summary())?,
            },
            DeskCommand::Reset => {
                calc.reset();
                writeln!(out, "idle")?;
            }
            DeskCommand::Help => write_help(out)?,
            DeskCommand::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}
