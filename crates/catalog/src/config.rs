//! Catalog configuration data (JSON).
//!
//! ```json
//! {
//!   "line": "Wanderlust",
//!   "base": { "name": "Hammock", "retail": "119.99", "cost": "84.61" },
//!   "groups": {
//!     "tarp": { "Quest": { "retail": "149.99", "cost": "61.92" } },
//!     "insulation": {
//!       "Burrow Slim": { "parts": [
//!         { "name": "Top Quilt (Burrow Slim)", "retail": "299.99", "cost": "105.25" },
//!         { "name": "Under Quilt", "retail": "304.99", "cost": "109.46" }
//!       ] }
//!     }
//!   },
//!   "accessories": [ { "name": "Mesh Peak Pocket", "retail": "5.99", "cost": "2.00" } ]
//! }
//! ```
//!
//! Amounts may be JSON strings or numbers.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kitcalc_core::{DomainError, PricedComponent};

use crate::catalog::{Catalog, NamedComponent};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// On-disk shape of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub line: String,
    pub base: ComponentEntry,
    #[serde(default)]
    pub groups: IndexMap<String, IndexMap<String, VariantEntry>>,
    #[serde(default)]
    pub accessories: Vec<ComponentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    pub retail: Decimal,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantEntry {
    Single { retail: Decimal, cost: Decimal },
    Bundle { parts: Vec<ComponentEntry> },
}

impl ComponentEntry {
    fn into_named(self) -> Result<NamedComponent, DomainError> {
        let price = PricedComponent::new(self.retail, self.cost)
            .map_err(|e| DomainError::validation(format!("'{}': {e}", self.name)))?;
        Ok(NamedComponent::new(self.name, price))
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = DomainError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        let base = doc.base.into_named()?;
        let mut builder = Catalog::builder(doc.line).base(base.name, base.price);

        for (group, options) in doc.groups {
            builder = builder.group(group.clone());
            for (name, entry) in options {
                builder = match entry {
                    VariantEntry::Single { retail, cost } => {
                        let price = PricedComponent::new(retail, cost).map_err(|e| {
                            DomainError::validation(format!("'{group}/{name}': {e}"))
                        })?;
                        builder.variant(group.clone(), name, price)
                    }
                    VariantEntry::Bundle { parts } => {
                        let parts = parts
                            .into_iter()
                            .map(ComponentEntry::into_named)
                            .collect::<Result<Vec<_>, _>>()?;
                        builder.bundled_variant(group.clone(), name, parts)
                    }
                };
            }
        }

        for accessory in doc.accessories {
            let accessory = accessory.into_named()?;
            builder = builder.accessory(accessory.name, accessory.price);
        }

        builder.build()
    }
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Catalog::try_from(doc)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            line = catalog.line(),
            groups = catalog.groups().count(),
            accessories = catalog.accessories().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "line": "Sample",
        "base": { "name": "Hammock", "retail": "100", "cost": "60" },
        "groups": {
            "tarp": { "A": { "retail": "50", "cost": "20" }, "B": { "retail": 70.5, "cost": 30 } },
            "insulation": {
                "Slim": { "parts": [
                    { "name": "Top", "retail": "10", "cost": "4" },
                    { "name": "Under", "retail": "12", "cost": "5" }
                ] }
            }
        },
        "accessories": [ { "name": "Strap", "retail": "5", "cost": "1" } ]
    }"#;

    #[test]
    fn loads_single_and_bundled_variants() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.line(), "Sample");
        assert_eq!(catalog.price_of("tarp", "A").unwrap().retail, dec!(50));
        assert_eq!(catalog.price_of("tarp", "B").unwrap().retail, dec!(70.5));
        let slim = catalog.price_of("insulation", "Slim").unwrap();
        assert_eq!(slim.retail, dec!(22));
        assert_eq!(slim.cost, dec!(9));
        assert_eq!(catalog.accessory_bundle_total().retail, dec!(5));
    }

    #[test]
    fn group_order_follows_document() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            catalog.group_names().collect::<Vec<_>>(),
            vec!["tarp", "insulation"]
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn negative_amount_is_invalid() {
        let json = r#"{ "line": "X", "base": { "name": "H", "retail": "-1", "cost": "0" } }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Invalid(DomainError::Validation(_))));
    }

    #[test]
    fn empty_group_is_invalid() {
        let json = r#"{ "line": "X", "base": { "name": "H", "retail": "1", "cost": "0" },
                        "groups": { "tarp": {} } }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Invalid(_)));
    }

    #[test]
    fn overflowing_accessory_total_is_invalid() {
        let max = "79228162514264337593543950335";
        let json = format!(
            r#"{{ "line": "X", "base": {{ "name": "H", "retail": "{max}", "cost": "1" }},
                 "accessories": [
                    {{ "name": "a", "retail": "{max}", "cost": "1" }},
                    {{ "name": "b", "retail": "{max}", "cost": "1" }}
                 ] }}"#
        );
        let err = Catalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Invalid(DomainError::Validation(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Catalog::from_path("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
