//! Dashboard boundary for the kit pricing calculator.
//!
//! The widgets themselves (selects, slider, table, chart) live outside this
//! workspace. This crate holds the one session they edit and turns each engine
//! report into plain render-ready records.

pub mod format;
pub mod session;
pub mod view;

pub use session::{PricingSession, MAX_DISCOUNT_PERCENT};
pub use view::{DashboardView, GroupOptions, KitRowView, MarginBand, MarginBar, Spark, SummaryView};
