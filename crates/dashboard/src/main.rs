use anyhow::Context;

use kitcalc_catalog::{defaults, Catalog};
use kitcalc_dashboard::PricingSession;

/// Prints the opening dashboard state as JSON for the external renderer.
///
/// `KITCALC_CATALOG` points at a catalog JSON file; without it the built-in
/// Wanderlust catalog is used.
fn main() -> anyhow::Result<()> {
    kitcalc_observability::init();

    let catalog = match std::env::var_os("KITCALC_CATALOG") {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("loading catalog from {}", path.to_string_lossy()))?,
        None => {
            tracing::info!("KITCALC_CATALOG not set; using built-in catalog");
            defaults::wanderlust().context("building built-in catalog")?
        }
    };

    let session = PricingSession::wanderlust_default(catalog)
        .context("catalog does not offer the default kit selections")?;
    let view = session.snapshot().context("pricing default kits")?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
