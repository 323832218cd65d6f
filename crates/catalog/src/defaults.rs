//! Built-in Wanderlust hammock catalog.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kitcalc_core::{DomainResult, PricedComponent};

use crate::catalog::{Catalog, NamedComponent};

pub const LINE: &str = "Wanderlust";
pub const BASE: &str = "Hammock";

pub const TARP: &str = "tarp";
pub const TARP_QUEST: &str = "Quest";
pub const TARP_JOURNEY: &str = "Journey";

pub const INSULATION: &str = "insulation";
pub const BURROW_SLIM: &str = "Burrow Slim";
pub const BURROW_STANDARD: &str = "Burrow Standard";

fn priced(retail: Decimal, cost: Decimal) -> DomainResult<PricedComponent> {
    PricedComponent::new(retail, cost)
}

/// The hammock line as sold today.
///
/// Every insulation tier ships the same under quilt with a tier-specific top
/// quilt, so each tier is a two-part bundle.
pub fn wanderlust() -> DomainResult<Catalog> {
    let under_quilt = NamedComponent::new("Under Quilt", priced(dec!(304.99), dec!(109.46))?);

    Catalog::builder(LINE)
        .base(BASE, priced(dec!(119.99), dec!(84.61))?)
        .variant(TARP, TARP_QUEST, priced(dec!(149.99), dec!(61.92))?)
        .variant(TARP, TARP_JOURNEY, priced(dec!(199.99), dec!(82.00))?)
        .bundled_variant(
            INSULATION,
            BURROW_SLIM,
            vec![
                NamedComponent::new(
                    "Top Quilt (Burrow Slim)",
                    priced(dec!(299.99), dec!(105.25))?,
                ),
                under_quilt.clone(),
            ],
        )
        .bundled_variant(
            INSULATION,
            BURROW_STANDARD,
            vec![
                NamedComponent::new(
                    "Top Quilt (Burrow Standard)",
                    priced(dec!(324.99), dec!(113.77))?,
                ),
                under_quilt,
            ],
        )
        .accessory("Ridgeline Organizer", priced(dec!(19.99), dec!(2.46))?)
        .accessory("Mesh Peak Pocket", priced(dec!(5.99), dec!(2.00))?)
        .accessory("Reflective Guy Line", priced(dec!(4.00), dec!(0.84))?)
        .accessory("Ultralight Daisy Chain (20ft)", priced(dec!(30.00), dec!(25.00))?)
        .build()
}
