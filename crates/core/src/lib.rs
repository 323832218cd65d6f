//! `kitcalc-core`: pricing value objects and the domain error model.
//!
//! Pure data and arithmetic; no IO.

pub mod error;
pub mod money;
pub mod rate;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{margin, PricedComponent};
pub use rate::DiscountRate;
pub use value_object::ValueObject;
