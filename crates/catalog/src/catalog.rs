//! Immutable product catalog.

use indexmap::IndexMap;
use serde::Serialize;

use kitcalc_core::{DomainError, DomainResult, PricedComponent};

/// A priced part with a display name (base item, accessory, bundle part).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedComponent {
    pub name: String,
    pub price: PricedComponent,
}

impl NamedComponent {
    pub fn new(name: impl Into<String>, price: PricedComponent) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One selectable option inside a variant group.
///
/// A variant is either a single priced part or a bundle of parts sold together
/// (an insulation tier that always ships a top quilt with an under quilt). For
/// bundles `price` is the precomputed sum of `parts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    name: String,
    price: PricedComponent,
    parts: Vec<NamedComponent>,
}

impl Variant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &PricedComponent {
        &self.price
    }

    /// Bundle parts; empty for single-part variants.
    pub fn parts(&self) -> &[NamedComponent] {
        &self.parts
    }

    pub fn is_bundle(&self) -> bool {
        !self.parts.is_empty()
    }
}

/// Mutually exclusive options; a kit picks at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantGroup {
    name: String,
    options: IndexMap<String, Variant>,
}

impl VariantGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, variant: &str) -> Option<&Variant> {
        self.options.get(variant)
    }

    /// Option names in declaration order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Static pricing facts for one product line.
///
/// Built once at startup and never mutated; the accessory bundle total is
/// computed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    line: String,
    base: NamedComponent,
    groups: IndexMap<String, VariantGroup>,
    accessories: Vec<NamedComponent>,
    accessory_total: PricedComponent,
}

impl Catalog {
    pub fn builder(line: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(line)
    }

    /// Product line name (e.g. "Wanderlust").
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn base(&self) -> &NamedComponent {
        &self.base
    }

    pub fn base_component(&self) -> PricedComponent {
        self.base.price
    }

    pub fn accessory_bundle_total(&self) -> PricedComponent {
        self.accessory_total
    }

    pub fn accessories(&self) -> &[NamedComponent] {
        &self.accessories
    }

    pub fn group(&self, group: &str) -> Option<&VariantGroup> {
        self.groups.get(group)
    }

    pub fn groups(&self) -> impl Iterator<Item = &VariantGroup> {
        self.groups.values()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Enumerated option names for `group`, in declaration order.
    pub fn options(&self, group: &str) -> DomainResult<Vec<&str>> {
        let group = self
            .groups
            .get(group)
            .ok_or_else(|| DomainError::unknown_group(group))?;
        Ok(group.option_names().collect())
    }

    /// Price of one variant.
    ///
    /// Fails with `UnknownGroup` if the group does not exist and `UnknownVariant`
    /// if the group has no option of that name.
    pub fn price_of(&self, group: &str, variant: &str) -> DomainResult<PricedComponent> {
        let found = self
            .groups
            .get(group)
            .ok_or_else(|| DomainError::unknown_group(group))?;
        found
            .get(variant)
            .map(|v| v.price)
            .ok_or_else(|| DomainError::unknown_variant(group, variant))
    }
}

/// Incremental catalog construction with validation deferred to [`build`].
///
/// [`build`]: CatalogBuilder::build
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    line: String,
    base: Option<NamedComponent>,
    groups: IndexMap<String, IndexMap<String, Variant>>,
    accessories: Vec<NamedComponent>,
    errors: Vec<String>,
}

impl CatalogBuilder {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            base: None,
            groups: IndexMap::new(),
            accessories: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn base(mut self, name: impl Into<String>, price: PricedComponent) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            self.errors.push("base component name cannot be empty".to_string());
        }
        if self.base.is_some() {
            self.errors.push("base component defined twice".to_string());
        }
        self.base = Some(NamedComponent::new(name, price));
        self
    }

    /// Declare a group with no options yet. `build` rejects it unless options are
    /// added later.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if group.trim().is_empty() {
            self.errors.push("variant group name cannot be empty".to_string());
        }
        self.groups.entry(group).or_default();
        self
    }

    pub fn variant(
        self,
        group: impl Into<String>,
        name: impl Into<String>,
        price: PricedComponent,
    ) -> Self {
        let name = name.into();
        self.insert_variant(
            group.into(),
            Variant {
                name,
                price,
                parts: Vec::new(),
            },
        )
    }

    /// A variant sold as several parts; its price is the sum of the parts.
    pub fn bundled_variant(
        mut self,
        group: impl Into<String>,
        name: impl Into<String>,
        parts: Vec<NamedComponent>,
    ) -> Self {
        let name = name.into();
        if parts.is_empty() {
            self.errors
                .push(format!("bundled variant '{name}' must have at least one part"));
        }
        let price = PricedComponent::checked_sum(parts.iter().map(|p| &p.price))
            .unwrap_or_else(|| {
                self.errors
                    .push(format!("bundled variant '{name}' parts overflow its price"));
                PricedComponent::ZERO
            });
        self.insert_variant(group.into(), Variant { name, price, parts })
    }

    pub fn accessory(mut self, name: impl Into<String>, price: PricedComponent) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            self.errors.push("accessory name cannot be empty".to_string());
        }
        self.accessories.push(NamedComponent::new(name, price));
        self
    }

    fn insert_variant(mut self, group: String, variant: Variant) -> Self {
        if group.trim().is_empty() {
            self.errors.push("variant group name cannot be empty".to_string());
        }
        if variant.name.trim().is_empty() {
            self.errors
                .push(format!("variant name in group '{group}' cannot be empty"));
        }
        let options = self.groups.entry(group.clone()).or_default();
        if options.contains_key(&variant.name) {
            self.errors.push(format!(
                "variant '{}' defined twice in group '{group}'",
                variant.name
            ));
        }
        options.insert(variant.name.clone(), variant);
        self
    }

    pub fn build(self) -> DomainResult<Catalog> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(DomainError::validation(first));
        }
        let base = self
            .base
            .ok_or_else(|| DomainError::validation("catalog has no base component"))?;

        let mut groups = IndexMap::with_capacity(self.groups.len());
        for (name, options) in self.groups {
            if options.is_empty() {
                return Err(DomainError::validation(format!(
                    "variant group '{name}' has no options"
                )));
            }
            groups.insert(name.clone(), VariantGroup { name, options });
        }

        let accessory_total =
            PricedComponent::checked_sum(self.accessories.iter().map(|a| &a.price))
                .ok_or_else(|| DomainError::validation("accessory bundle total overflows"))?;

        Ok(Catalog {
            line: self.line,
            base,
            groups,
            accessories: self.accessories,
            accessory_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn priced(retail: rust_decimal::Decimal, cost: rust_decimal::Decimal) -> PricedComponent {
        PricedComponent::new(retail, cost).unwrap()
    }

    fn small_catalog() -> Catalog {
        Catalog::builder("Test")
            .base("hammock", priced(dec!(100), dec!(60)))
            .variant("tarp", "A", priced(dec!(50), dec!(20)))
            .variant("tarp", "B", priced(dec!(70), dec!(30)))
            .accessory("strap", priced(dec!(5), dec!(1)))
            .accessory("pocket", priced(dec!(3), dec!(2)))
            .build()
            .unwrap()
    }

    #[test]
    fn price_of_returns_variant_price() {
        let catalog = small_catalog();
        assert_eq!(catalog.price_of("tarp", "B").unwrap(), priced(dec!(70), dec!(30)));
    }

    #[test]
    fn price_of_rejects_unknown_variant() {
        let err = small_catalog().price_of("tarp", "Z").unwrap_err();
        assert_eq!(err, DomainError::unknown_variant("tarp", "Z"));
    }

    #[test]
    fn price_of_rejects_unknown_group() {
        let err = small_catalog().price_of("quilt", "A").unwrap_err();
        match err {
            DomainError::UnknownGroup { group } => assert_eq!(group, "quilt"),
            _ => panic!("Expected UnknownGroup error"),
        }
    }

    #[test]
    fn accessory_total_is_precomputed_sum() {
        let catalog = small_catalog();
        assert_eq!(catalog.accessory_bundle_total(), priced(dec!(8), dec!(3)));
        assert_eq!(catalog.accessories().len(), 2);
    }

    #[test]
    fn empty_accessory_bundle_totals_zero() {
        let catalog = Catalog::builder("Bare")
            .base("hammock", priced(dec!(1), dec!(1)))
            .build()
            .unwrap();
        assert_eq!(catalog.accessory_bundle_total(), PricedComponent::ZERO);
    }

    #[test]
    fn options_preserve_declaration_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.options("tarp").unwrap(), vec!["A", "B"]);
        assert_eq!(catalog.group_names().collect::<Vec<_>>(), vec!["tarp"]);
    }

    #[test]
    fn bundled_variant_sums_parts() {
        let catalog = Catalog::builder("Test")
            .base("hammock", priced(dec!(100), dec!(60)))
            .bundled_variant(
                "insulation",
                "Slim",
                vec![
                    NamedComponent::new("top", priced(dec!(299.99), dec!(105.25))),
                    NamedComponent::new("under", priced(dec!(304.99), dec!(109.46))),
                ],
            )
            .build()
            .unwrap();

        let variant = catalog.group("insulation").unwrap().get("Slim").unwrap();
        assert!(variant.is_bundle());
        assert_eq!(variant.price(), &priced(dec!(604.98), dec!(214.71)));
    }

    #[test]
    fn build_requires_base() {
        let err = Catalog::builder("Test")
            .variant("tarp", "A", priced(dec!(1), dec!(1)))
            .build()
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for missing base"),
        }
    }

    #[test]
    fn build_rejects_empty_group() {
        let err = Catalog::builder("Test")
            .base("hammock", priced(dec!(1), dec!(1)))
            .group("insulation")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("insulation"));
    }

    #[test]
    fn build_rejects_duplicate_variant() {
        let result = Catalog::builder("Test")
            .base("hammock", priced(dec!(1), dec!(1)))
            .variant("tarp", "A", priced(dec!(1), dec!(1)))
            .variant("tarp", "A", priced(dec!(2), dec!(1)))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_blank_names() {
        let result = Catalog::builder("Test")
            .base("hammock", priced(dec!(1), dec!(1)))
            .variant("tarp", "  ", priced(dec!(1), dec!(1)))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_accessory_total_overflow() {
        let max = priced(rust_decimal::Decimal::MAX, dec!(1));
        let err = Catalog::builder("T")
            .base("h", max)
            .accessory("x", max)
            .accessory("y", max)
            .build()
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("accessory")),
            _ => panic!("Expected Validation error for overflowing accessories"),
        }
    }

    #[test]
    fn build_rejects_bundle_overflow() {
        let max = priced(rust_decimal::Decimal::MAX, dec!(1));
        let err = Catalog::builder("T")
            .base("h", priced(dec!(1), dec!(1)))
            .bundled_variant(
                "insulation",
                "Heavy",
                vec![NamedComponent::new("top", max), NamedComponent::new("under", max)],
            )
            .build()
            .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("Heavy")),
            _ => panic!("Expected Validation error for overflowing bundle"),
        }
    }
}
