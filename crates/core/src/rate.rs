//! Global discount rate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Fraction taken off every kit's retail price, in `[0, 1)`.
///
/// The upper bound is exclusive so a discounted price can never reach zero or go
/// negative. Tighter UI limits (the 0..=60% slider) live in the dashboard layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DiscountRate(Decimal);

impl ValueObject for DiscountRate {}

impl DiscountRate {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const TEN_PERCENT: Self = Self(Decimal::from_parts(10, 0, 0, false, 2));
    pub const FIFTEEN_PERCENT: Self = Self(Decimal::from_parts(15, 0, 0, false, 2));
    pub const TWENTY_PERCENT: Self = Self(Decimal::from_parts(20, 0, 0, false, 2));

    pub fn new(rate: Decimal) -> DomainResult<Self> {
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            return Err(DomainError::invalid_discount(format!(
                "{rate} is outside [0, 1)"
            )));
        }
        Ok(Self(rate))
    }

    /// Whole-percent constructor (`15` -> 0.15).
    pub fn from_percent(percent: u32) -> DomainResult<Self> {
        Self::new(Decimal::new(i64::from(percent), 2))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `1 - rate`: the share of retail the customer still pays.
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.0
    }

    /// Price after discount.
    pub fn apply(&self, price: Decimal) -> Decimal {
        price * self.complement()
    }

    /// Rate as a whole percent, rounded half away from zero.
    pub fn as_percent(&self) -> u32 {
        (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for DiscountRate {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountRate> for Decimal {
    fn from(value: DiscountRate) -> Self {
        value.0
    }
}

impl core::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}
