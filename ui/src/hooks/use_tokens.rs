use api::fiat_amount::FiatAmount;
use api::price_map::TokenPriceMap;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Read access to the app-wide token price state.
#[derive(Clone, Copy)]
pub struct Tokens {
    pub prices: Signal<Option<TokenPriceMap>>,
}

impl Tokens {
    /// Price of a token contract, if known. Address casing is ignored.
    pub fn price_of(&self, address: &str) -> Option<FiatAmount> {
        self.prices.read().as_ref().and_then(|map| map.price_of(address))
    }

    /// Lower-cased addresses that currently have a price. Empty until the
    /// first price fetch lands.
    pub fn priced_addresses(&self) -> Vec<String> {
        self.prices
            .read()
            .as_ref()
            .map(|map| map.priced_addresses())
            .unwrap_or_default()
    }
}

/// Hands out the shared price state installed at the app root.
pub fn use_tokens() -> Tokens {
    let state = use_context::<AppStateMut>();
    Tokens {
        prices: state.prices,
    }
}
