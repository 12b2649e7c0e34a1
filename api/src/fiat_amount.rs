//! A safe, self-contained type for representing fiat currency amounts.

use std::fmt;
use std::ops::Add;

use num_traits::CheckedAdd;

use crate::fiat_currency::FiatCurrency;

/// A monetary value in a specific fiat currency.
///
/// Internally the amount is stored as a signed 64-bit integer in the
/// currency's smallest unit (e.g. cents for USD) to avoid floating-point
/// inaccuracies. The `Display` implementation formats it as a plain numeric
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    /// Creates a `FiatAmount` from a floating-point value, typically a price
    /// fresh off a provider API. The float is rounded to the nearest minor
    /// unit for the currency's number of decimal places.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Creates a `FiatAmount` directly from its smallest unit.
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Raw amount in the currency's smallest unit (e.g. cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Multiplies the amount by a token quantity, rounding to the nearest
    /// minor unit. Used to turn a unit price into a position value.
    pub fn scaled_by(&self, factor: f64) -> Self {
        let amount = (self.amount as f64 * factor).round() as i64;
        Self { amount, ..*self }
    }

    /// Formats the amount with its currency symbol (e.g. "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// Formats the amount with its currency code (e.g. "25.34 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats the amount as a plain numeric string (e.g. "25.34").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = self.amount / divisor;
        let minor_units = self.amount.abs() % divisor;

        write!(
            f,
            "{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}

/// Addition. Panics if currencies do not match; use `checked_add` where the
/// operands' currencies are not statically known to agree.
impl Add for FiatAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.currency != rhs.currency {
            panic!(
                "Cannot add amounts of different currencies: {:?} and {:?}",
                self.currency, rhs.currency
            );
        }
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

/// Checked addition. Returns `None` on currency mismatch or overflow.
impl CheckedAdd for FiatAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.currency != v.currency {
            return None;
        }
        self.amount.checked_add(v.amount).map(|new_amount| Self {
            amount: new_amount,
            currency: self.currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_construction_rounds_to_minor_units() {
        let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
        assert_eq!(amount.as_minor_units(), 12346);

        let yen = FiatAmount::new_from_float(123.456, FiatCurrency::JPY);
        assert_eq!(yen.as_minor_units(), 123);
    }

    #[test]
    fn display_respects_currency_decimals() {
        assert_eq!(
            FiatAmount::new_from_minor(12345, FiatCurrency::USD).to_string(),
            "123.45"
        );
        assert_eq!(
            FiatAmount::new_from_minor(5, FiatCurrency::USD).to_string(),
            "0.05"
        );
        assert_eq!(
            FiatAmount::new_from_minor(123, FiatCurrency::JPY).to_string(),
            "123"
        );
    }

    #[test]
    fn symbol_formatting() {
        let amount = FiatAmount::new_from_minor(2534, FiatCurrency::USD);
        assert_eq!(amount.to_string_with_symbol(), "$25.34");
        assert_eq!(amount.to_string_with_code(), "25.34 USD");
    }

    #[test]
    fn scaling_a_unit_price() {
        let price = FiatAmount::new_from_minor(150, FiatCurrency::USD); // $1.50
        assert_eq!(price.scaled_by(2.5).as_minor_units(), 375);
    }

    #[test]
    fn checked_add_rejects_currency_mismatch() {
        let usd = FiatAmount::new_from_minor(100, FiatCurrency::USD);
        let eur = FiatAmount::new_from_minor(100, FiatCurrency::EUR);
        assert_eq!(usd.checked_add(&eur), None);
        assert_eq!(
            usd.checked_add(&usd),
            Some(FiatAmount::new_from_minor(200, FiatCurrency::USD))
        );
    }
}
