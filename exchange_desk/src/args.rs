//! Command-line arguments for the exchange desk.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use exchange_common::currency::{CryptoAsset, FiatCurrency};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Currency the amount is expressed in.
    #[clap(long, value_enum, default_value_t = FiatCurrency::USD)]
    pub from: FiatCurrency,

    /// Currency to convert the amount to.
    #[clap(long, value_enum, default_value_t = FiatCurrency::EUR)]
    pub to: FiatCurrency,

    /// Amount to exchange. Without it the desk starts in interactive mode.
    #[clap(long)]
    pub amount: Option<String>,

    /// Crypto asset to estimate the converted amount in.
    #[clap(long, value_enum, default_value_t = CryptoAsset::BTC)]
    pub crypto: CryptoAsset,

    /// Seed for the simulated rate feed, for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Initiate a purchase right after the quote (one-shot mode only).
    #[clap(long)]
    pub purchase: bool,

    /// Print quotes as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_form() {
        let args = Args::parse_from(["exchange_desk"]);
        assert_eq!(args.from, FiatCurrency::USD);
        assert_eq!(args.to, FiatCurrency::EUR);
        assert_eq!(args.crypto, CryptoAsset::BTC);
        assert!(args.amount.is_none());
        assert!(!args.purchase && !args.json);
    }

    #[test]
    fn parses_lowercase_selectors() {
        let args = Args::parse_from([
            "exchange_desk",
            "--from",
            "gbp",
            "--to",
            "jpy",
            "--crypto",
            "ltc",
            "--amount",
            "25",
            "--seed",
            "9",
        ]);
        assert_eq!(args.from, FiatCurrency::GBP);
        assert_eq!(args.to, FiatCurrency::JPY);
        assert_eq!(args.crypto, CryptoAsset::LTC);
        assert_eq!(args.amount.as_deref(), Some("25"));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn rejects_unsupported_currency() {
        assert!(Args::try_parse_from(["exchange_desk", "--from", "chf"]).is_err());
    }
}
