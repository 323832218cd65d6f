//! Single-operator pricing session.
//!
//! Owns the kit rows, the discount rate and the active preset, and applies the
//! dashboard's input constraints before anything reaches the engine: selections
//! must come from the catalog's option lists, volumes are clamped to zero, and
//! the slider is bounded to 0..=60%. Every snapshot recomputes from scratch.

use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use kitcalc_catalog::defaults::{BURROW_SLIM, BURROW_STANDARD, INSULATION, TARP, TARP_QUEST};
use kitcalc_catalog::Catalog;
use kitcalc_core::{DiscountRate, DomainError, DomainResult};
use kitcalc_pricing::{compute, KitConfiguration, PricingReport, ScenarioPreset};

use crate::view::DashboardView;

/// Upper bound of the discount slider, in whole percent.
pub const MAX_DISCOUNT_PERCENT: u32 = 60;

#[derive(Debug, Clone)]
pub struct PricingSession {
    catalog: Catalog,
    kits: Vec<KitConfiguration>,
    discount: DiscountRate,
    scenario: ScenarioPreset,
}

impl PricingSession {
    /// Empty session with the default preset (15% off) applied.
    pub fn new(catalog: Catalog) -> Self {
        let scenario = ScenarioPreset::default();
        Self {
            catalog,
            kits: Vec::new(),
            discount: scenario.apply(DiscountRate::ZERO),
            scenario,
        }
    }

    /// Replace the rows; every selection must name an offered option.
    pub fn with_kits(mut self, kits: Vec<KitConfiguration>) -> DomainResult<Self> {
        for kit in &kits {
            self.check_selections(kit)?;
        }
        self.kits = kits
            .into_iter()
            .map(|kit| {
                let volume = kit.volume.max(0);
                kit.with_volume(volume)
            })
            .collect();
        Ok(self)
    }

    /// The three Wanderlust rows the dashboard opens with.
    pub fn wanderlust_default(catalog: Catalog) -> DomainResult<Self> {
        let line = catalog.line().to_string();
        Self::new(catalog).with_kits(vec![
            KitConfiguration::new(format!("{line} Basic")).select(TARP, TARP_QUEST),
            KitConfiguration::new(format!("{line} Insul. Slim"))
                .select(TARP, TARP_QUEST)
                .select(INSULATION, BURROW_SLIM),
            KitConfiguration::new(format!("{line} Insul. Standard"))
                .select(TARP, TARP_QUEST)
                .select(INSULATION, BURROW_STANDARD),
        ])
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn kits(&self) -> &[KitConfiguration] {
        &self.kits
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    pub fn scenario(&self) -> ScenarioPreset {
        self.scenario
    }

    pub fn add_kit(&mut self, kit: KitConfiguration) -> DomainResult<()> {
        self.check_selections(&kit)?;
        let volume = kit.volume.max(0);
        self.kits.push(kit.with_volume(volume));
        Ok(())
    }

    pub fn remove_kit(&mut self, index: usize) -> DomainResult<KitConfiguration> {
        self.kit_mut(index)?;
        Ok(self.kits.remove(index))
    }

    /// Pick `variant` for `group` on row `index`.
    pub fn set_selection(&mut self, index: usize, group: &str, variant: &str) -> DomainResult<()> {
        let offered = self.catalog.options(group)?;
        if !offered.contains(&variant) {
            tracing::warn!(group, variant, "rejected selection outside option list");
            return Err(DomainError::unknown_variant(group, variant));
        }
        let kit = self.kit_mut(index)?;
        kit.selections.insert(group.to_string(), variant.to_string());
        tracing::debug!(kit = %kit.name, group, variant, "selection changed");
        Ok(())
    }

    /// Drop `group` from row `index` (e.g. remove insulation).
    pub fn clear_selection(&mut self, index: usize, group: &str) -> DomainResult<()> {
        let kit = self.kit_mut(index)?;
        kit.selections.shift_remove(group);
        Ok(())
    }

    /// Set a row's volume, clamping negatives to zero.
    pub fn set_volume(&mut self, index: usize, volume: i64) -> DomainResult<()> {
        let kit = self.kit_mut(index)?;
        kit.volume = volume.max(0);
        Ok(())
    }

    /// Set a row's volume from numeric-field text.
    ///
    /// Blank or unparsable text counts as zero, fractions are truncated, and
    /// negatives clamp to zero. Exponent notation ("1e3") is accepted and
    /// counts beyond `i64` saturate.
    pub fn set_volume_input(&mut self, index: usize, raw: &str) -> DomainResult<()> {
        let volume = parse_volume(raw);
        self.set_volume(index, volume)
    }

    /// Slider input in whole percent; clamps to `0..=60` and marks the preset
    /// as `Custom`.
    pub fn set_discount_percent(&mut self, percent: u32) -> DomainResult<()> {
        let clamped = percent.min(MAX_DISCOUNT_PERCENT);
        self.discount = DiscountRate::from_percent(clamped)?;
        self.scenario = ScenarioPreset::Custom;
        tracing::debug!(percent = clamped, "discount slider moved");
        Ok(())
    }

    pub fn apply_scenario(&mut self, preset: ScenarioPreset) {
        self.discount = preset.apply(self.discount);
        self.scenario = preset;
        tracing::debug!(preset = %preset, discount = %self.discount, "scenario applied");
    }

    /// Preset button by label ("10% Off", "Custom", ...).
    pub fn apply_scenario_label(&mut self, label: &str) -> DomainResult<()> {
        let preset = ScenarioPreset::from_str(label)?;
        self.apply_scenario(preset);
        Ok(())
    }

    /// Engine output for the current inputs.
    pub fn report(&self) -> DomainResult<PricingReport> {
        compute(&self.catalog, &self.kits, self.discount)
    }

    /// Full view model for the current inputs.
    pub fn snapshot(&self) -> DomainResult<DashboardView> {
        let report = self.report()?;
        Ok(DashboardView::build(
            &self.catalog,
            &self.kits,
            report,
            self.discount.as_percent(),
            self.scenario,
        ))
    }

    fn kit_mut(&mut self, index: usize) -> DomainResult<&mut KitConfiguration> {
        let len = self.kits.len();
        self.kits
            .get_mut(index)
            .ok_or_else(|| DomainError::validation(format!("no kit at row {index} (rows: {len})")))
    }

    fn check_selections(&self, kit: &KitConfiguration) -> DomainResult<()> {
        for (group, variant) in &kit.selections {
            self.catalog.price_of(group, variant)?;
        }
        Ok(())
    }
}

fn parse_volume(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let Ok(value) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))
    else {
        return 0;
    };
    if value < Decimal::ZERO {
        return 0;
    }
    // Counts past i64 saturate rather than reading as zero.
    value.trunc().to_i64().unwrap_or(i64::MAX)
}
