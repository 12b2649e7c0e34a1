//! A map of current token prices, keyed by contract address.

use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

use crate::address::same_address;
use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;

/// Prices for a set of token contracts, all quoted in one fiat currency.
///
/// Keys keep whatever casing the provider returned (checksummed and
/// lower-cased addresses both occur in the wild); every lookup compares
/// case-insensitively. Only the raw minor-unit amounts are stored; accessors
/// rebuild `FiatAmount`s on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPriceMap {
    currency: FiatCurrency,
    prices: HashMap<String, i64>,
}

impl Default for TokenPriceMap {
    fn default() -> Self {
        Self::new(FiatCurrency::default())
    }
}

impl TokenPriceMap {
    /// Creates a new, empty `TokenPriceMap` quoting in `currency`.
    pub fn new(currency: FiatCurrency) -> Self {
        Self {
            currency,
            prices: HashMap::new(),
        }
    }

    /// The currency every price in the map is quoted in.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Inserts or updates the price for a token contract, keeping the
    /// caller's address casing. The amount is expected to be quoted in the
    /// map's currency. Returns the prior price, if any.
    pub fn insert(&mut self, address: impl Into<String>, price: FiatAmount) -> Option<FiatAmount> {
        self.prices
            .insert(address.into(), price.as_minor_units())
            .map(|old| FiatAmount::new_from_minor(old, self.currency))
    }

    /// The price for a token contract. Address casing is ignored.
    pub fn price_of(&self, address: &str) -> Option<FiatAmount> {
        self.prices
            .iter()
            .find(|(key, _)| same_address(key, address))
            .map(|(_, &amount)| FiatAmount::new_from_minor(amount, self.currency))
    }

    /// True if the map carries a price for `address`, ignoring casing.
    pub fn contains_address(&self, address: &str) -> bool {
        self.price_of(address).is_some()
    }

    /// Lower-cased addresses that currently have a price.
    pub fn priced_addresses(&self) -> Vec<String> {
        self.prices.keys().map(|key| key.to_lowercase()).collect()
    }

    /// Iterates over (address, price) entries in the caller's casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FiatAmount)> + '_ {
        self.prices.iter().map(|(address, &amount)| {
            (
                address.as_str(),
                FiatAmount::new_from_minor(amount, self.currency),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(addresses: &[&str]) -> TokenPriceMap {
        let mut map = TokenPriceMap::new(FiatCurrency::USD);
        for address in addresses {
            map.insert(*address, FiatAmount::new_from_float(1.0, FiatCurrency::USD));
        }
        map
    }

    #[test]
    fn lookups_ignore_address_casing() {
        let map = map_with(&["0xaaa"]);
        assert!(map.contains_address("0xAAA"));
        assert!(map.price_of("0xAaA").is_some());
        assert!(!map.contains_address("0xBBB"));
    }

    #[test]
    fn insert_returns_prior_price_and_keeps_casing() {
        let mut map = TokenPriceMap::new(FiatCurrency::USD);
        assert!(map
            .insert("0xAbC", FiatAmount::new_from_minor(100, FiatCurrency::USD))
            .is_none());
        let old = map.insert("0xAbC", FiatAmount::new_from_minor(200, FiatCurrency::USD));
        assert_eq!(old, Some(FiatAmount::new_from_minor(100, FiatCurrency::USD)));
        assert_eq!(map.iter().next().unwrap().0, "0xAbC");
    }

    #[test]
    fn priced_addresses_are_lower_cased() {
        let map = map_with(&["0xAbC", "0xDEF"]);
        let mut addresses = map.priced_addresses();
        addresses.sort();
        assert_eq!(addresses, vec!["0xabc".to_string(), "0xdef".to_string()]);
    }
}
