//! Money coercion into integer cents.
//!
//! [`cents_from`] is the canonical money-to-integer-cents boundary used by
//! package values, line-item prices and rate totals. Decimal amounts go
//! through [`rust_decimal`] so that cent rounding is exact ("1.005" dollars is
//! 101 cents, not whatever binary floating point makes of it).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary input prior to normalization into integer cents.
///
/// Call sites usually rely on the `From` impls: an integer is taken as
/// already-normalized cents, a float as a decimal amount in major units, and
/// text is parsed either way depending on whether it contains a decimal point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Money {
    /// Already-normalized integer cents.
    Cents(i64),
    /// A decimal amount in major units (e.g. 12.34 dollars).
    Amount(f64),
    /// A textual amount: with a decimal point it is major units ("12.3"),
    /// without it is integer cents ("1200").
    Text(String),
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self::Cents(cents)
    }
}

impl From<i32> for Money {
    fn from(cents: i32) -> Self {
        Self::Cents(cents as i64)
    }
}

impl From<u32> for Money {
    fn from(cents: u32) -> Self {
        Self::Cents(cents as i64)
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self::Amount(amount)
    }
}

impl From<&str> for Money {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Money {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Converts a monetary input into integer cents.
///
/// `None` maps to `None`. Decimal amounts are rounded half-away-from-zero on
/// the cent. Unparseable text coerces to 0 rather than failing; money inputs
/// arrive from merchant data and carrier responses that are not validated
/// upstream.
pub fn cents_from<M: Into<Money>>(money: Option<M>) -> Option<i64> {
    money.map(|m| match m.into() {
        Money::Cents(cents) => cents,
        Money::Amount(amount) => amount_to_cents(amount),
        Money::Text(text) => {
            let text = text.trim();
            if text.contains('.') {
                text.parse::<Decimal>().map(decimal_to_cents).unwrap_or(0)
            } else {
                text.parse::<i64>().unwrap_or(0)
            }
        }
    })
}

fn amount_to_cents(amount: f64) -> i64 {
    // f64 Display is shortest-roundtrip, so parsing it recovers the decimal
    // value the caller wrote (1.005, not 1.00499999999999989).
    amount
        .to_string()
        .parse::<Decimal>()
        .map(decimal_to_cents)
        .unwrap_or(0)
}

fn decimal_to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_passes_through() {
        assert_eq!(cents_from(None::<i64>), None);
    }

    #[test]
    fn test_integer_is_already_cents() {
        assert_eq!(cents_from(Some(5)), Some(5));
        assert_eq!(cents_from(Some(-250)), Some(-250));
    }

    #[test]
    fn test_float_rounds_half_up_on_cents() {
        assert_eq!(cents_from(Some(1.005)), Some(101));
        assert_eq!(cents_from(Some(12.34)), Some(1234));
        assert_eq!(cents_from(Some(0.1)), Some(10));
    }

    #[test]
    fn test_text_with_decimal_point_is_major_units() {
        assert_eq!(cents_from(Some("12.3")), Some(1230));
        assert_eq!(cents_from(Some("1.005")), Some(101));
    }

    #[test]
    fn test_text_without_decimal_point_is_cents() {
        assert_eq!(cents_from(Some("1200")), Some(1200));
    }

    #[test]
    fn test_unparseable_text_coerces_to_zero() {
        assert_eq!(cents_from(Some("free")), Some(0));
        assert_eq!(cents_from(Some("n.a")), Some(0));
    }
}
