//! Rate feeds for the quote calculator.
//!
//! There is no market data behind the desk: `SimulatedRates` draws both coefficients
//! uniformly at random. The calculator only sees the `RateProvider` trait, so a fixed
//! or seeded provider can be swapped in where results must be reproducible.

use std::ops::Range;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::currency::{CryptoAsset, FiatCurrency};

/// Bounds of the simulated fiat cross rate (both ends excluded).
pub const CROSS_RATE_RANGE: Range<f64> = 0.5..1.5;
/// Bounds of the simulated fiat-to-crypto rate (both ends excluded).
pub const CRYPTO_RATE_RANGE: Range<f64> = 0.00001..0.0001;

/// Source of the two coefficients a quote is derived from.
pub trait RateProvider {
    /// Units of `to` per one unit of `from`.
    fn cross_rate(&mut self, from: FiatCurrency, to: FiatCurrency) -> f64;

    /// Units of `asset` per one unit of `fiat`.
    fn crypto_rate(&mut self, fiat: FiatCurrency, asset: CryptoAsset) -> f64;
}

/// Uniformly random coefficients standing in for a real rate feed.
pub struct SimulatedRates<R = ThreadRng> {
    rng: R,
}

impl SimulatedRates<ThreadRng> {
    /// Create a provider backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SimulatedRates<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRates<StdRng> {
    /// Create a reproducible provider: the same seed yields the same sequence of rates.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SimulatedRates<R> {
    /// Sample from `range` excluding its lower bound.
    fn sample(&mut self, range: &Range<f64>) -> f64 {
        loop {
            let value = self.rng.random_range(range.clone());
            if value > range.start {
                return value;
            }
        }
    }
}

impl<R: Rng> RateProvider for SimulatedRates<R> {
    fn cross_rate(&mut self, _from: FiatCurrency, _to: FiatCurrency) -> f64 {
        self.sample(&CROSS_RATE_RANGE)
    }

    fn crypto_rate(&mut self, _fiat: FiatCurrency, _asset: CryptoAsset) -> f64 {
        self.sample(&CRYPTO_RATE_RANGE)
    }
}

/// Provider returning the same pair of coefficients for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRates {
    /// Returned by every `cross_rate` call.
    pub cross_rate: f64,
    /// Returned by every `crypto_rate` call.
    pub crypto_rate: f64,
}

impl FixedRates {
    /// Create a provider with fixed coefficients.
    pub fn new(cross_rate: f64, crypto_rate: f64) -> Self {
        Self {
            cross_rate,
            crypto_rate,
        }
    }
}

impl RateProvider for FixedRates {
    fn cross_rate(&mut self, _from: FiatCurrency, _to: FiatCurrency) -> f64 {
        self.cross_rate
    }

    fn crypto_rate(&mut self, _fiat: FiatCurrency, _asset: CryptoAsset) -> f64 {
        self.crypto_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_open_range(value: f64, range: &Range<f64>) -> bool {
        value > range.start && value < range.end
    }

    #[test]
    fn simulated_rates_stay_inside_their_ranges() {
        let mut rates = SimulatedRates::new();
        for _ in 0..10_000 {
            let cross = rates.cross_rate(FiatCurrency::USD, FiatCurrency::EUR);
            let crypto = rates.crypto_rate(FiatCurrency::EUR, CryptoAsset::BTC);
            assert!(in_open_range(cross, &CROSS_RATE_RANGE), "cross rate {}", cross);
            assert!(in_open_range(crypto, &CRYPTO_RATE_RANGE), "crypto rate {}", crypto);
        }
    }

    #[test]
    fn seeded_rates_are_reproducible() {
        let mut a = SimulatedRates::seeded(42);
        let mut b = SimulatedRates::seeded(42);
        for _ in 0..16 {
            assert_eq!(
                a.cross_rate(FiatCurrency::GBP, FiatCurrency::JPY),
                b.cross_rate(FiatCurrency::GBP, FiatCurrency::JPY)
            );
            assert_eq!(
                a.crypto_rate(FiatCurrency::JPY, CryptoAsset::XRP),
                b.crypto_rate(FiatCurrency::JPY, CryptoAsset::XRP)
            );
        }
    }

    #[test]
    fn draws_are_independent() {
        let mut rates = SimulatedRates::seeded(7);
        let first = rates.cross_rate(FiatCurrency::USD, FiatCurrency::EUR);
        let second = rates.cross_rate(FiatCurrency::USD, FiatCurrency::EUR);
        assert_ne!(first, second);
    }

    #[test]
    fn fixed_rates_ignore_the_pair() {
        let mut rates = FixedRates::new(1.0, 0.00005);
        assert_eq!(rates.cross_rate(FiatCurrency::USD, FiatCurrency::JPY), 1.0);
        assert_eq!(rates.crypto_rate(FiatCurrency::EUR, CryptoAsset::LTC), 0.00005);
    }
}
