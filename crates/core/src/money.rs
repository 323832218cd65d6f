//! Priced components and the margin guard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// One sellable part or bundle: what the customer pays and what it costs us.
///
/// Retail and cost are independent. Cost above retail is allowed and simply
/// produces a negative margin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricedComponent {
    pub retail: Decimal,
    pub cost: Decimal,
}

impl ValueObject for PricedComponent {}

impl PricedComponent {
    pub const ZERO: Self = Self {
        retail: Decimal::ZERO,
        cost: Decimal::ZERO,
    };

    /// Create a component, rejecting negative amounts.
    pub fn new(retail: Decimal, cost: Decimal) -> DomainResult<Self> {
        if retail < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "retail must be non-negative (got {retail})"
            )));
        }
        if cost < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "cost must be non-negative (got {cost})"
            )));
        }
        Ok(Self { retail, cost })
    }

    /// Retail minus cost. May be negative.
    pub fn profit(&self) -> Decimal {
        self.retail - self.cost
    }

    /// Componentwise sum, or `None` if either amount overflows.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(Self {
            retail: self.retail.checked_add(rhs.retail)?,
            cost: self.cost.checked_add(rhs.cost)?,
        })
    }

    /// Sum of `parts`; an empty iterator sums to [`PricedComponent::ZERO`].
    pub fn checked_sum<'a>(parts: impl IntoIterator<Item = &'a PricedComponent>) -> Option<Self> {
        parts
            .into_iter()
            .try_fold(Self::ZERO, |acc, part| acc.checked_add(part))
    }
}

/// Profit as a fraction of `basis`, or zero when the basis is not positive.
///
/// An unpriced kit has no meaningful margin, but the dashboard still has to
/// render a number for it.
pub fn margin(profit: Decimal, basis: Decimal) -> Decimal {
    if basis > Decimal::ZERO {
        profit / basis
    } else {
        Decimal::ZERO
    }
}
