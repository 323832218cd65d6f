//! Catalog of priced kit components.
//!
//! Static data only: a base item, variant groups a kit may pick from, and the
//! accessory bundle every kit ships with. No pricing logic lives here.

pub mod catalog;
pub mod config;
pub mod defaults;

pub use catalog::{Catalog, CatalogBuilder, NamedComponent, Variant, VariantGroup};
pub use config::{CatalogDocument, CatalogLoadError, ComponentEntry, VariantEntry};
