//! Donation amount in minor currency units.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The input string is not a decimal number.
    #[error("amount is not a valid decimal number")]
    InvalidNumber,
    /// The input has more than two decimal places.
    #[error("amount cannot have more than two decimal places")]
    TooPrecise,
    /// The amount is zero or negative.
    #[error("amount must be positive")]
    NotPositive,
    /// The amount does not fit in the supported range.
    #[error("amount is out of range")]
    OutOfRange,
}

/// A monetary amount stored as a whole number of minor units (cents).
///
/// Donations are recorded in minor units to avoid floating-point drift:
/// a donor entering `"25.50"` is stored as `2550` and rendered back as
/// `"$25.50"`.
///
/// ## Examples
///
/// ```
/// use parish_core::Amount;
///
/// let amount = Amount::parse("25.50").unwrap();
/// assert_eq!(amount.as_minor_units(), 2550);
/// assert_eq!(amount.to_string(), "$25.50");
///
/// assert!(Amount::parse("0").is_err());
/// assert!(Amount::parse("-5").is_err());
/// assert!(Amount::parse("1.999").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct Amount(i64);

impl Amount {
    /// Create an `Amount` from a count of minor units (cents).
    ///
    /// # Errors
    ///
    /// Returns `AmountError::NotPositive` if `minor_units` is zero or
    /// negative.
    pub const fn from_minor_units(minor_units: i64) -> Result<Self, AmountError> {
        if minor_units <= 0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(minor_units))
    }

    /// Parse an `Amount` from a decimal string in major units,
    /// e.g. `"25.50"` dollars.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number, carries more
    /// than two decimal places, is zero or negative, or overflows.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let decimal: Decimal = s.trim().parse().map_err(|_| AmountError::InvalidNumber)?;

        // Normalize strips trailing zeros so "25.50" and "25.5" agree on scale
        if decimal.normalize().scale() > 2 {
            return Err(AmountError::TooPrecise);
        }

        let minor = (decimal * Decimal::ONE_HUNDRED)
            .to_i64()
            .ok_or(AmountError::OutOfRange)?;

        Self::from_minor_units(minor)
    }

    /// Get the amount as a count of minor units (cents).
    #[must_use]
    pub const fn as_minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    /// Formats as a dollar string with two decimal places, e.g. `$25.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", Decimal::new(self.0, 2))
    }
}

impl TryFrom<i64> for Amount {
    type Error = AmountError;

    fn try_from(minor_units: i64) -> Result<Self, Self::Error> {
        Self::from_minor_units(minor_units)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
