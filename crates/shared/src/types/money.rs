//! Money type with decimal precision and currency.
//!
//! Never use floating-point for money. This type wraps `rust_decimal::Decimal`
//! and stores amounts in major units (dollars, not cents).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Number of minor units (decimal places) used by the currency.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Jpy => 0,
            Self::Usd | Self::Idr | Self::Eur | Self::Sgd => 2,
        }
    }

    /// Symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Idr => "Rp",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Creates an amount from an integer count of minor units (e.g., cents).
    #[must_use]
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(minor, currency.minor_units()),
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats as `$1,234.50`, rounding to the currency's minor units.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.currency.minor_units();
        let rounded = self.amount.round_dp(scale);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.prec$}", rounded.abs(), prec = scale as usize);
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (plain.as_str(), None),
        };

        write!(
            f,
            "{sign}{}{}",
            self.currency.symbol(),
            group_thousands(int_part)
        )?;
        if let Some(frac_part) = frac_part {
            write!(f, ".{frac_part}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_from_minor() {
        let money = Money::from_minor(123_456, Currency::Usd);
        assert_eq!(money.amount, dec!(1234.56));

        let yen = Money::from_minor(500, Currency::Jpy);
        assert_eq!(yen.amount, dec!(500));
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Idr);
        assert!(money.is_zero());
        assert_eq!(money.currency, Currency::Idr);
    }

    #[rstest]
    #[case(dec!(1000), Currency::Usd, "$1,000.00")]
    #[case(dec!(250), Currency::Usd, "$250.00")]
    #[case(dec!(0), Currency::Usd, "$0.00")]
    #[case(dec!(1234567.891), Currency::Usd, "$1,234,567.89")]
    #[case(dec!(-45.5), Currency::Eur, "-€45.50")]
    #[case(dec!(15000), Currency::Jpy, "¥15,000")]
    #[case(dec!(999.999), Currency::Sgd, "S$1,000.00")]
    fn test_money_display(#[case] amount: Decimal, #[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(Money::new(amount, currency).to_string(), expected);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }

    proptest! {
        /// Grouping never changes the digits, only inserts separators.
        #[test]
        fn prop_display_preserves_cents(cents in 0i64..10_000_000_000) {
            let text = Money::from_minor(cents, Currency::Usd).to_string();
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();
            let expected = cents.to_string();
            prop_assert_eq!(digits.trim_start_matches('0'), expected.trim_start_matches('0'));
            prop_assert!(text.starts_with('$'));
            let int_part = text.trim_start_matches('$').split('.').next().unwrap_or_default();
            for group in int_part.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
