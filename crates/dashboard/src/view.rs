//! Render-ready view model for the external dashboard widgets.
//!
//! Everything here is derived from a [`PricingReport`]; the table, KPI cards and
//! margin chart only read these records.

use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use kitcalc_catalog::Catalog;
use kitcalc_pricing::{KitConfiguration, PerKitResult, PricingReport, ScenarioPreset};

use crate::format::{currency, percent, percent_value};

/// Colour band of a margin pill.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginBand {
    /// 50% and up.
    High,
    /// 35% up to 50%.
    Medium,
    Low,
}

impl MarginBand {
    pub fn of(margin: Decimal) -> Self {
        if margin >= Decimal::new(50, 2) {
            MarginBand::High
        } else if margin >= Decimal::new(35, 2) {
            MarginBand::Medium
        } else {
            MarginBand::Low
        }
    }
}

/// Relative bar widths (0..=100) comparing original and discounted margin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Spark {
    pub original_width: u32,
    pub discounted_width: u32,
}

impl Spark {
    pub fn new(original: Decimal, discounted: Decimal) -> Self {
        // 0.001 floor keeps two zero margins from dividing by zero.
        let max = original.max(discounted).max(Decimal::new(1, 3));
        let width = |m: Decimal| {
            (m / max * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .max(Decimal::ZERO)
                .to_u32()
                .unwrap_or(0)
        };
        Self {
            original_width: width(original),
            discounted_width: width(discounted),
        }
    }
}

/// Options for one variant-group selector column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOptions {
    pub group: String,
    pub options: Vec<String>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitRowView {
    pub name: String,
    pub selections: IndexMap<String, String>,
    pub volume: i64,
    pub retail: String,
    pub cost: String,
    pub discounted: String,
    pub margin_original: String,
    pub margin_discounted: String,
    pub band_original: MarginBand,
    pub band_discounted: MarginBand,
    pub spark: Spark,
}

/// Summary KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub total_retail: String,
    pub total_discounted: String,
    pub total_cost: String,
    pub weighted_margin_original: String,
    pub weighted_margin_discounted: String,
    pub total_profit_discounted: String,
}

/// One bar pair in the "margin by kit" chart, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarginBar {
    pub name: String,
    pub original: Decimal,
    pub discounted: Decimal,
}

/// Everything the page renders after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub discount_percent: u32,
    pub scenario: ScenarioPreset,
    pub presets: Vec<ScenarioPreset>,
    pub groups: Vec<GroupOptions>,
    pub rows: Vec<KitRowView>,
    pub summary: SummaryView,
    pub chart: Vec<MarginBar>,
    pub report: PricingReport,
}

impl DashboardView {
    pub fn build(
        catalog: &Catalog,
        kits: &[KitConfiguration],
        report: PricingReport,
        discount_percent: u32,
        scenario: ScenarioPreset,
    ) -> Self {
        let groups = catalog
            .groups()
            .map(|g| GroupOptions {
                group: g.name().to_string(),
                options: g.option_names().map(str::to_string).collect(),
            })
            .collect();

        let rows = kits
            .iter()
            .zip(&report.kits)
            .map(|(kit, result)| row_view(kit, result))
            .collect();

        let chart = report
            .kits
            .iter()
            .map(|r| MarginBar {
                name: chart_label(catalog.line(), &r.name),
                original: percent_value(r.margin_original),
                discounted: percent_value(r.margin_discounted),
            })
            .collect();

        let agg = &report.aggregate;
        let summary = SummaryView {
            total_retail: currency(agg.total_retail),
            total_discounted: currency(agg.total_discounted),
            total_cost: currency(agg.total_cost),
            weighted_margin_original: percent(agg.weighted_margin_original),
            weighted_margin_discounted: percent(agg.weighted_margin_discounted),
            total_profit_discounted: currency(agg.total_profit_discounted),
        };

        Self {
            title: format!("{} Kit Pricing", catalog.line()),
            discount_percent,
            scenario,
            presets: ScenarioPreset::ALL.to_vec(),
            groups,
            rows,
            summary,
            chart,
            report,
        }
    }
}

fn row_view(kit: &KitConfiguration, result: &PerKitResult) -> KitRowView {
    KitRowView {
        name: result.name.clone(),
        selections: kit.selections.clone(),
        volume: result.volume,
        retail: currency(result.retail),
        cost: currency(result.cost),
        discounted: currency(result.discounted),
        margin_original: percent(result.margin_original),
        margin_discounted: percent(result.margin_discounted),
        band_original: MarginBand::of(result.margin_original),
        band_discounted: MarginBand::of(result.margin_discounted),
        spark: Spark::new(result.margin_original, result.margin_discounted),
    }
}

/// Kit name without the product-line prefix ("Wanderlust Basic" -> "Basic").
fn chart_label(line: &str, name: &str) -> String {
    name.strip_prefix(line)
        .and_then(|rest| rest.strip_prefix(' '))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(name)
        .to_string()
}
