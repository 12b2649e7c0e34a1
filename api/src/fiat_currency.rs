//! The quote currencies the price providers can return.

use serde::Deserialize;
use serde::Serialize;

/// A fiat quote currency, with its formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    EUR,
    GBP,
    JPY,
    #[default]
    USD,
}

impl FiatCurrency {
    /// Number of decimal digits used by the currency. JPY has none.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Graphical symbol for the currency (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::USD => "$",
        }
    }

    /// ISO 4217 code (e.g. "USD"), via the `strum::IntoStaticStr` derive.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::USD => "United States Dollar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("usd").unwrap(), FiatCurrency::USD);
        assert_eq!(FiatCurrency::from_str("Jpy").unwrap(), FiatCurrency::JPY);
        assert!(FiatCurrency::from_str("CHF").is_err());
    }
}
