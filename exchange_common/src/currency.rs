//! Fiat currencies and crypto assets offered by the desk.
//!
//! Both sets are closed enums: parsing is case-insensitive on the code (`usd`, `Btc`),
//! display is always the upper-case code.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Fiat currencies available in the source and destination selectors.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum FiatCurrency {
    USD,
    EUR,
    GBP,
    JPY,
}

impl FiatCurrency {
    /// Supported fiat currencies in selector order.
    pub const ALL: [FiatCurrency; 4] = [
        FiatCurrency::USD,
        FiatCurrency::EUR,
        FiatCurrency::GBP,
        FiatCurrency::JPY,
    ];
}

/// Crypto assets a converted amount can be estimated in.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum CryptoAsset {
    BTC,
    ETH,
    XRP,
    LTC,
}

impl CryptoAsset {
    /// Supported crypto assets in selector order.
    pub const ALL: [CryptoAsset; 4] = [
        CryptoAsset::BTC,
        CryptoAsset::ETH,
        CryptoAsset::XRP,
        CryptoAsset::LTC,
    ];

    /// Long name used in selector labels.
    pub fn name(&self) -> &'static str {
        match self {
            CryptoAsset::BTC => "Bitcoin",
            CryptoAsset::ETH => "Ethereum",
            CryptoAsset::XRP => "Ripple",
            CryptoAsset::LTC => "Litecoin",
        }
    }

    /// Selector label, e.g. `Bitcoin (BTC)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("usd".parse::<FiatCurrency>().unwrap(), FiatCurrency::USD);
        assert_eq!("Jpy".parse::<FiatCurrency>().unwrap(), FiatCurrency::JPY);
        assert_eq!("eth".parse::<CryptoAsset>().unwrap(), CryptoAsset::ETH);
    }

    #[test]
    fn rejects_unsupported_codes() {
        assert!("CHF".parse::<FiatCurrency>().is_err());
        assert!("DOGE".parse::<CryptoAsset>().is_err());
        assert!("".parse::<FiatCurrency>().is_err());
    }

    #[test]
    fn displays_upper_case_code() {
        assert_eq!(FiatCurrency::GBP.to_string(), "GBP");
        assert_eq!(CryptoAsset::LTC.to_string(), "LTC");
    }

    #[test]
    fn labels_crypto_assets() {
        assert_eq!(CryptoAsset::XRP.label(), "Ripple (XRP)");
        let labels: Vec<String> = CryptoAsset::ALL.iter().map(CryptoAsset::label).collect();
        assert_eq!(labels[0], "Bitcoin (BTC)");
        assert_eq!(labels.len(), 4);
    }
}
