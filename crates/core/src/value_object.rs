//! Value object trait: equality by value, not identity.
//!
//! Every pricing fact in this workspace is a value object: a component's
//! retail/cost pair, a discount rate, a computed result row. None of them carry
//! identity, and "changing" one means building a new one.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two
/// `PricedComponent { retail: 10, cost: 4 }` values are interchangeable no matter
/// which catalog entry produced them.
///
/// ```ignore
/// use rust_decimal_macros::dec;
/// use kitcalc_core::PricedComponent;
///
/// let a = PricedComponent::new(dec!(10), dec!(4)).unwrap();
/// let b = PricedComponent::new(dec!(10.00), dec!(4.0)).unwrap();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
