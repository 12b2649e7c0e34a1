use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

use crate::fiat_currency::FiatCurrency;
use crate::price_providers::PriceProviderKind;

/// Server-side presentation settings, snapshotted once per page load and
/// shipped to the client with the initial payload.
///
/// # Environment variables (case-insensitive values)
/// - `QUOTE_CURRENCY`: "USD", "EUR", "GBP" or "JPY". Defaults to USD.
/// - `PRICE_PROVIDER`: "coingecko" or "defillama". Defaults to CoinGecko.
///   Note that DefiLlama can only quote USD.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    quote_currency: FiatCurrency,
    price_provider: PriceProviderKind,
}

impl UserPrefs {
    pub fn from_env() -> Self {
        let quote_currency = env::var("QUOTE_CURRENCY")
            .ok()
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or_default();

        let price_provider = env::var("PRICE_PROVIDER")
            .ok()
            .and_then(|s| PriceProviderKind::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            quote_currency,
            price_provider,
        }
    }

    pub fn quote_currency(&self) -> FiatCurrency {
        self.quote_currency
    }

    pub fn price_provider(&self) -> PriceProviderKind {
        self.price_provider
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
