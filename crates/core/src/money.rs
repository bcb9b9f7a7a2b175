//! Exact decimal money amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in the store currency.
///
/// Backed by [`Decimal`], so sums and products never drift the way binary
/// floating point does. Arithmetic is checked: `None` means the result is
/// outside the range a `Decimal` can hold.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from minor units, e.g. `from_minor(1999, 2)` is 19.99.
    pub fn from_minor(units: i64, scale: u32) -> Self {
        Self(Decimal::new(units, scale))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity.
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl ValueObject for Money {}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
