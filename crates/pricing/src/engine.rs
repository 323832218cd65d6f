//! Pricing engine.
//!
//! Pure and deterministic: `(catalog, kits, discount) -> report`. Nothing is
//! cached between calls; every edit on the dashboard recomputes the whole
//! report from its inputs.

use rust_decimal::Decimal;
use serde::Serialize;

use kitcalc_catalog::Catalog;
use kitcalc_core::{margin, DiscountRate, DomainError, DomainResult, PricedComponent};

use crate::kit::KitConfiguration;

/// Financial metrics for one kit at unit volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerKitResult {
    pub name: String,
    pub volume: i64,
    pub retail: Decimal,
    pub cost: Decimal,
    pub discounted: Decimal,
    pub profit_original: Decimal,
    pub profit_discounted: Decimal,
    pub margin_original: Decimal,
    pub margin_discounted: Decimal,
}

/// Volume-weighted totals across all kits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub total_retail: Decimal,
    pub total_discounted: Decimal,
    pub total_cost: Decimal,
    pub total_profit_original: Decimal,
    pub total_profit_discounted: Decimal,
    pub weighted_margin_original: Decimal,
    pub weighted_margin_discounted: Decimal,
    pub kit_count: usize,
    pub unit_count: i64,
}

impl AggregateResult {
    fn empty() -> Self {
        Self {
            total_retail: Decimal::ZERO,
            total_discounted: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_profit_original: Decimal::ZERO,
            total_profit_discounted: Decimal::ZERO,
            weighted_margin_original: Decimal::ZERO,
            weighted_margin_discounted: Decimal::ZERO,
            kit_count: 0,
            unit_count: 0,
        }
    }

    /// Add `r` weighted by its volume. `None` if any total overflows; the
    /// totals are left untouched in that case.
    fn accumulate(&mut self, r: &PerKitResult) -> Option<()> {
        let volume = Decimal::from(r.volume);
        let add = |total: Decimal, amount: Decimal| -> Option<Decimal> {
            total.checked_add(amount.checked_mul(volume)?)
        };

        let total_retail = add(self.total_retail, r.retail)?;
        let total_discounted = add(self.total_discounted, r.discounted)?;
        let total_cost = add(self.total_cost, r.cost)?;
        let total_profit_original = add(self.total_profit_original, r.profit_original)?;
        let total_profit_discounted = add(self.total_profit_discounted, r.profit_discounted)?;
        let unit_count = self.unit_count.checked_add(r.volume)?;

        self.total_retail = total_retail;
        self.total_discounted = total_discounted;
        self.total_cost = total_cost;
        self.total_profit_original = total_profit_original;
        self.total_profit_discounted = total_profit_discounted;
        self.unit_count = unit_count;
        self.kit_count += 1;
        Some(())
    }
}

/// Per-kit rows (input order) plus the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingReport {
    pub kits: Vec<PerKitResult>,
    pub aggregate: AggregateResult,
}

/// Price a single kit.
///
/// The kit always contains the base component and the accessory bundle; each
/// group present in `selections` adds the chosen variant.
pub fn price_kit(
    catalog: &Catalog,
    kit: &KitConfiguration,
    discount: DiscountRate,
) -> DomainResult<PerKitResult> {
    let mut parts = vec![catalog.base_component(), catalog.accessory_bundle_total()];
    for (group, variant) in &kit.selections {
        parts.push(catalog.price_of(group, variant)?);
    }

    let PricedComponent { retail, cost } = PricedComponent::checked_sum(&parts)
        .ok_or_else(|| DomainError::overflow(format!("price of kit '{}'", kit.name)))?;
    let discounted = discount.apply(retail);
    let profit_original = retail - cost;
    let profit_discounted = discounted - cost;

    tracing::debug!(
        kit = %kit.name,
        %retail,
        %cost,
        %discounted,
        "priced kit"
    );

    Ok(PerKitResult {
        name: kit.name.clone(),
        volume: kit.volume,
        retail,
        cost,
        discounted,
        profit_original,
        profit_discounted,
        margin_original: margin(profit_original, retail),
        margin_discounted: margin(profit_discounted, discounted),
    })
}

/// Price every kit and fold the volume-weighted aggregate.
///
/// Volumes are checked for every kit before any pricing happens; the first
/// negative one (in input order) fails the whole computation with
/// `InvalidVolume`. Unknown groups or variants fail the same way, as do totals
/// that no longer fit (`Overflow`).
pub fn compute(
    catalog: &Catalog,
    kits: &[KitConfiguration],
    discount: DiscountRate,
) -> DomainResult<PricingReport> {
    if let Some(bad) = kits.iter().find(|k| k.volume < 0) {
        tracing::warn!(kit = %bad.name, volume = bad.volume, "rejected negative volume");
        return Err(DomainError::invalid_volume(bad.name.clone(), bad.volume));
    }

    let results = kits
        .iter()
        .map(|kit| price_kit(catalog, kit, discount))
        .collect::<DomainResult<Vec<_>>>()?;

    let mut aggregate = AggregateResult::empty();
    for r in &results {
        if aggregate.accumulate(r).is_none() {
            tracing::warn!(kit = %r.name, volume = r.volume, "aggregate totals overflowed");
            return Err(DomainError::overflow(format!(
                "totals at kit '{}' (volume {})",
                r.name, r.volume
            )));
        }
    }
    aggregate.weighted_margin_original =
        margin(aggregate.total_profit_original, aggregate.total_retail);
    aggregate.weighted_margin_discounted =
        margin(aggregate.total_profit_discounted, aggregate.total_discounted);

    tracing::info!(
        kits = aggregate.kit_count,
        units = aggregate.unit_count,
        discount = %discount,
        total_retail = %aggregate.total_retail,
        total_profit_discounted = %aggregate.total_profit_discounted,
        "computed pricing report"
    );

    Ok(PricingReport {
        kits: results,
        aggregate,
    })
}
