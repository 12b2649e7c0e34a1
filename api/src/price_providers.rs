//! Defines traits and implementations for external token price sources.

use dioxus::prelude::ServerFnError;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::network::Network;
use crate::price_map::TokenPriceMap;

/// A trait for any service that can quote token contract prices.
pub trait PriceProvider {
    /// Fetches prices for the given contracts, quoted in `currency`.
    async fn token_prices(
        &self,
        network: Network,
        addresses: &[&str],
        currency: FiatCurrency,
    ) -> Result<TokenPriceMap, ServerFnError>;
}

/// The price sources the server can be configured with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PriceProviderKind {
    #[default]
    CoinGecko,
    DefiLlama,
}

/// Provides price data from the public CoinGecko token-price API.
pub mod coin_gecko {
    use super::*;

    /// Response shape: contract address -> { currency code -> price }.
    type TokenPriceResponse = HashMap<String, HashMap<String, f64>>;

    /// An implementation of the `PriceProvider` trait for CoinGecko.
    pub struct CoinGecko;

    pub(crate) fn parse_response(
        resp: &TokenPriceResponse,
        currency: FiatCurrency,
    ) -> TokenPriceMap {
        let vs = currency.code().to_lowercase();
        let mut prices = TokenPriceMap::new(currency);
        for (address, quotes) in resp {
            if let Some(price) = quotes.get(&vs) {
                prices.insert(address.clone(), FiatAmount::new_from_float(*price, currency));
            }
        }
        prices
    }

    impl PriceProvider for CoinGecko {
        async fn token_prices(
            &self,
            network: Network,
            addresses: &[&str],
            currency: FiatCurrency,
        ) -> Result<TokenPriceMap, ServerFnError> {
            let url = format!(
                "https://api.coingecko.com/api/v3/simple/token_price/{}?contract_addresses={}&vs_currencies={}",
                network.price_platform(),
                addresses.join(","),
                currency.code().to_lowercase(),
            );

            let client = reqwest::Client::new();
            let resp = client
                .get(&url)
                .send()
                .await
                .map_err(ServerFnError::new)?
                .json::<TokenPriceResponse>()
                .await
                .map_err(ServerFnError::new)?;

            Ok(parse_response(&resp, currency))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn picks_the_requested_quote_currency() {
            let mut resp = TokenPriceResponse::new();
            resp.insert(
                "0xAbC".to_string(),
                HashMap::from([("usd".to_string(), 1.5), ("eur".to_string(), 1.4)]),
            );
            resp.insert(
                "0xdef".to_string(),
                HashMap::from([("eur".to_string(), 2.0)]),
            );

            let prices = parse_response(&resp, FiatCurrency::USD);
            assert_eq!(prices.len(), 1);
            assert_eq!(
                prices.price_of("0xabc"),
                Some(FiatAmount::new_from_float(1.5, FiatCurrency::USD))
            );
            assert!(!prices.contains_address("0xdef"));
        }
    }
}

/// Provides price data from the DefiLlama current-prices API.
pub mod defi_llama {
    use super::*;
    use serde_json::Value;

    /// An implementation of the `PriceProvider` trait for DefiLlama.
    ///
    /// DefiLlama only quotes USD; requests for another currency are refused
    /// so the configuration error surfaces instead of mislabelled prices.
    pub struct DefiLlama;

    pub(crate) fn parse_response(resp: &Value, currency: FiatCurrency) -> TokenPriceMap {
        let mut prices = TokenPriceMap::new(currency);
        if let Some(coins) = resp.get("coins").and_then(Value::as_object) {
            for (key, entry) in coins {
                // Keys look like "ethereum:0xC02a...". Keep only the address.
                let Some((_, address)) = key.split_once(':') else {
                    continue;
                };
                if let Some(price) = entry.get("price").and_then(Value::as_f64) {
                    prices.insert(address, FiatAmount::new_from_float(price, currency));
                }
            }
        }
        prices
    }

    impl PriceProvider for DefiLlama {
        async fn token_prices(
            &self,
            network: Network,
            addresses: &[&str],
            currency: FiatCurrency,
        ) -> Result<TokenPriceMap, ServerFnError> {
            if !currency.is_usd() {
                return Err(ServerFnError::new("DefiLlama quotes USD only"));
            }

            let coins = addresses
                .iter()
                .map(|address| format!("{}:{}", network.llama_chain(), address))
                .collect::<Vec<_>>()
                .join(",");
            let url = format!("https://coins.llama.fi/prices/current/{coins}");

            let client = reqwest::Client::new();
            let resp = client
                .get(&url)
                .send()
                .await
                .map_err(ServerFnError::new)?
                .json::<Value>()
                .await
                .map_err(ServerFnError::new)?;

            Ok(parse_response(&resp, currency))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[test]
        fn strips_chain_prefixes_and_reads_prices() {
            let resp = json!({
                "coins": {
                    "ethereum:0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2": {
                        "price": 2514.37,
                        "symbol": "WETH",
                        "confidence": 0.99
                    },
                    "malformed-key-without-colon": { "price": 1.0 },
                    "ethereum:0xba100000625a3754423978a60c9317c58a424e3D": {
                        "symbol": "BAL"
                    }
                }
            });

            let prices = parse_response(&resp, FiatCurrency::USD);
            assert_eq!(prices.len(), 1);
            assert_eq!(
                prices.price_of("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
                Some(FiatAmount::new_from_float(2514.37, FiatCurrency::USD))
            );
        }
    }
}
