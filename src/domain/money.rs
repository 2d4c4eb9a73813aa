//! Money primitives
//!
//! Exact decimal money values. Prices are validated at construction time,
//! so a negative price cannot exist in a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price represents a validated, exact, non-negative monetary value.
///
/// # Invariants
/// - Value is never negative (zero is allowed)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use orders_analytics::domain::Price;
///
/// let price = Price::new(Decimal::new(1200, 0)).unwrap();
/// assert_eq!(price.value(), Decimal::new(1200, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(Decimal);

/// Errors that can occur when creating or parsing money values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("Money value cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Money value has too many decimal places (max {max}, got {found})")]
    TooManyDecimals { max: u32, found: u32 },

    #[error("Invalid money format: {0}")]
    ParseError(String),

    #[error("Money value out of range")]
    Overflow,
}

impl Price {
    /// Create a new Price with validation.
    ///
    /// # Errors
    /// - `MoneyError::Negative` if value < 0
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Create a Price from an integer (no decimal places).
    pub fn from_integer(value: i64) -> Result<Self, MoneyError> {
        Self::new(Decimal::from(value))
    }

    /// Zero price
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Exact cost of `quantity` units at this price.
    ///
    /// # Errors
    /// - `MoneyError::Overflow` if the cost does not fit in a Decimal
    pub fn times(&self, quantity: u32) -> Result<Decimal, MoneyError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .ok_or(MoneyError::Overflow)
    }
}

/// Parse a money string, enforcing a maximum number of decimal places.
///
/// Used by record validation, where balances and prices arrive as strings.
pub fn parse_money(s: &str, max_scale: u32) -> Result<Decimal, MoneyError> {
    let value = Decimal::from_str(s.trim()).map_err(|e| MoneyError::ParseError(e.to_string()))?;

    if value.scale() > max_scale {
        return Err(MoneyError::TooManyDecimals {
            max: max_scale,
            found: value.scale(),
        });
    }
    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyError::Negative(value));
    }

    Ok(value)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim()).map_err(|e| MoneyError::ParseError(e.to_string()))?;
        Price::new(decimal)
    }
}

impl TryFrom<String> for Price {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Price::from_str(&value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0.to_string()
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}
