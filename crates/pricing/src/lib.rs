//! Kit pricing engine.
//!
//! Given a [`Catalog`](kitcalc_catalog::Catalog), a list of kit configurations and
//! a global discount rate, computes per-kit and volume-weighted aggregate
//! retail, cost, profit and margin. Pure functions; no IO and no caching.

pub mod engine;
pub mod kit;
pub mod scenario;

pub use engine::{compute, price_kit, AggregateResult, PerKitResult, PricingReport};
pub use kit::KitConfiguration;
pub use scenario::ScenarioPreset;
