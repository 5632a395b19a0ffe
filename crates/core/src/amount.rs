//! Amount - Non-negative integer cents for financial amounts
//!
//! All amounts in Vigil are stored as integer minor currency units (cents)
//! to avoid floating-point drift. Conversion from decimal input happens once
//! at ingestion.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A non-negative amount in minor currency units (cents).
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructors.
///
/// # Example
/// ```
/// use vigil_core::Amount;
///
/// let amount: Amount = "100.01".parse().unwrap();
/// assert_eq!(amount.cents(), 10001);
///
/// // Negative amounts are rejected
/// assert!("-5.00".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(0);

    /// Create an Amount from a raw cent count.
    ///
    /// Returns an error if the value is negative.
    pub fn from_cents(cents: i64) -> Result<Self, CoreError> {
        if cents < 0 {
            Err(CoreError::NegativeAmount(cents))
        } else {
            Ok(Self(cents))
        }
    }

    /// Convert a decimal currency value to cents, truncating sub-cent digits.
    pub fn from_decimal(value: Decimal) -> Result<Self, CoreError> {
        let cents = (value * Decimal::new(100, 0))
            .trunc()
            .to_i64()
            .ok_or_else(|| CoreError::MalformedAmount(value.to_string()))?;
        Self::from_cents(cents)
    }

    /// Convert a floating-point currency value to cents.
    pub fn from_f64(value: f64) -> Result<Self, CoreError> {
        let decimal =
            Decimal::try_from(value).map_err(|_| CoreError::MalformedAmount(value.to_string()))?;
        Self::from_decimal(decimal)
    }

    /// Inner cent count
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating addition on the cent count
    pub fn saturating_add(&self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s.trim()).map_err(|_| CoreError::MalformedAmount(s.to_string()))?;
        Self::from_decimal(decimal)
    }
}

impl TryFrom<i64> for Amount {
    type Error = CoreError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::from_cents(cents)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let amount = Amount::from_cents(10000).unwrap();
        assert_eq!(amount.cents(), 10000);
    }

    #[test]
    fn test_negative_cents_rejected() {
        let err = Amount::from_cents(-1).unwrap_err();
        assert_eq!(err, CoreError::NegativeAmount(-1));
    }

    #[test]
    fn test_from_decimal_truncates_sub_cent_digits() {
        assert_eq!(Amount::from_decimal(dec!(2348.7234)).unwrap().cents(), 234872);
        assert_eq!(Amount::from_decimal(dec!(100.01)).unwrap().cents(), 10001);
        assert_eq!(Amount::from_decimal(dec!(0.009)).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        assert!(Amount::from_decimal(dec!(-42.00)).is_err());
    }

    #[test]
    fn test_parse_decimal_string() {
        let amount: Amount = "100.00".parse().unwrap();
        assert_eq!(amount.cents(), 10000);

        let amount: Amount = "42".parse().unwrap();
        assert_eq!(amount.cents(), 4200);
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!("not-a-number".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Amount::from_f64(42.5).unwrap().cents(), 4250);
        assert!(Amount::from_f64(-1.0).is_err());
        assert!(Amount::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(10001).unwrap().to_string(), "100.01");
        assert_eq!(Amount::from_cents(5).unwrap().to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = Amount::from_cents(12345).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "12345");

        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amount);
    }

    #[test]
    fn test_serde_rejects_negative() {
        assert!(serde_json::from_str::<Amount>("-100").is_err());
    }

    #[test]
    fn test_ordering() {
        let small = Amount::from_cents(100).unwrap();
        let large = Amount::from_cents(200).unwrap();
        assert!(small < large);
        assert_eq!(small, Amount::from_cents(100).unwrap());
    }

    #[test]
    fn test_saturating_add() {
        let a = Amount::from_cents(100).unwrap();
        let b = Amount::from_cents(50).unwrap();
        assert_eq!(a.saturating_add(b).cents(), 150);
    }
}
