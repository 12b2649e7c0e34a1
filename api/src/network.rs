//! The EVM networks the portal can be pointed at.

use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// A supported network, selected server-side via the `NETWORK` env var.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Network {
    #[default]
    Ethereum,
    Polygon,
    Arbitrum,
}

impl Network {
    /// Reads the configured network, falling back to Ethereum.
    pub fn from_env() -> Self {
        env::var("NETWORK")
            .ok()
            .and_then(|s| Self::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Ticker of the chain's native asset.
    pub fn native_asset_symbol(&self) -> &'static str {
        match self {
            Self::Ethereum | Self::Arbitrum => "ETH",
            Self::Polygon => "POL",
        }
    }

    /// Display symbol of the canonical wrapped-native token.
    pub fn wrapped_native_symbol(&self) -> &'static str {
        match self {
            Self::Ethereum | Self::Arbitrum => "WETH",
            Self::Polygon => "WPOL",
        }
    }

    /// Contract address of the canonical wrapped-native token.
    pub fn wrapped_native_address(&self) -> &'static str {
        match self {
            Self::Ethereum => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            Self::Polygon => "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270",
            Self::Arbitrum => "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
        }
    }

    /// Platform slug CoinGecko uses to identify this chain.
    pub fn price_platform(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon-pos",
            Self::Arbitrum => "arbitrum-one",
        }
    }

    /// Chain slug DefiLlama uses in its `chain:address` coin keys.
    pub fn llama_chain(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Arbitrum => "arbitrum",
        }
    }

    /// Token contracts the portal keeps priced by default.
    pub fn tracked_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::Ethereum => &[
                "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", // WETH
                "0xba100000625a3754423978a60c9317c58a424e3D", // BAL
                "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", // USDC
                "0x6B175474E89094C44Da98b954EedeAC495271d0F", // DAI
                "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", // WBTC
                "0x7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0", // wstETH
            ],
            Self::Polygon => &[
                "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270", // WPOL
                "0x9a71012B13CA4d3D0Cdc72A177DF3ef03b0E76A3", // BAL
                "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", // USDC.e
                "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619", // WETH
            ],
            Self::Arbitrum => &[
                "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1", // WETH
                "0x040d1EdC9569d4Bab2D15287Dc5A4F10F56a56B8", // BAL
                "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8", // USDC.e
                "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1", // DAI
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Network::from_str("polygon").unwrap(), Network::Polygon);
        assert_eq!(Network::from_str("ARBITRUM").unwrap(), Network::Arbitrum);
        assert!(Network::from_str("solana").is_err());
    }

    #[test]
    fn wrapped_native_is_among_tracked_tokens() {
        for network in [Network::Ethereum, Network::Polygon, Network::Arbitrum] {
            assert!(network
                .tracked_tokens()
                .contains(&network.wrapped_native_address()));
        }
    }
}
