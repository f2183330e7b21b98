//! Pricing value objects - base price, discount and the derived final price

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Largest amount a NUMERIC(10,2) column can hold
const MAX_PRICE: f64 = 99_999_999.99;

/// Round a monetary amount to cents
#[inline]
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Non-negative base price, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting negative, non-finite and out-of-range amounts
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 || amount > MAX_PRICE {
            return Err(DomainError::InvalidPrice);
        }
        Ok(Self(round_cents(amount)))
    }

    /// Parse a price from form input such as `"59.99"`
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let amount = input
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidPrice)?;
        Self::new(amount)
    }

    #[inline]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Discount percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Discount(u8);

impl Discount {
    pub const NONE: Discount = Discount(0);

    /// Create a discount, rejecting values outside `0..=100`
    pub fn new(percent: i64) -> Result<Self, DomainError> {
        if !(0..=100).contains(&percent) {
            return Err(DomainError::InvalidDiscount);
        }
        Ok(Self(percent as u8))
    }

    /// Parse a discount from form input such as `"25"`
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if let Ok(percent) = trimmed.parse::<i64>() {
            return Self::new(percent);
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|_| DomainError::InvalidDiscount)?;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DomainError::InvalidDiscount);
        }
        if value.fract() != 0.0 {
            return Err(DomainError::ValidationError(
                "El descuento debe ser un número entero".to_string(),
            ));
        }
        Self::new(value as i64)
    }

    #[inline]
    pub const fn percent(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Serialize for Discount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Price after applying the discount, rounded to two decimals.
///
/// Without a discount the base price is returned untouched.
pub fn final_price(base: Price, discount: Discount) -> f64 {
    if discount.is_zero() {
        return base.amount();
    }
    round_cents(base.amount() * (1.0 - f64::from(discount.percent()) / 100.0))
}
