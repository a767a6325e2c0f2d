//! Startup seeding of the admin row and item catalog from config.toml.

use crate::{
    config::seed::SeedConfig,
    errors::Result,
    store::{Sheet, TableStore},
};
use tracing::{info, warn};

/// Writes the configured admin row and items into sheets that are still empty.
///
/// Sheets that already hold rows are left alone so edits made in the store survive
/// restarts.
pub async fn seed_from_config<S: TableStore>(store: &S, config: &SeedConfig) -> Result<()> {
    if let Some(admin_seed) = &config.admin {
        if store.get_all_rows(Sheet::Admin).await?.is_empty() {
            let admin = admin_seed.to_admin_config()?;
            store
                .append_row(Sheet::Admin, admin.to_row_values(), false)
                .await?;
            info!("Seeded admin configuration");
        } else {
            warn!("Admin sheet already populated. Skipping.");
        }
    }

    if config.items.is_empty() {
        return Ok(());
    }
    if !store.get_all_rows(Sheet::Items).await?.is_empty() {
        warn!("Item sheet already populated. Skipping {} configured items.", config.items.len());
        return Ok(());
    }

    let items = config
        .items
        .iter()
        .map(crate::config::seed::ItemSeed::to_item)
        .collect::<Result<Vec<_>>>()?;
    for item in &items {
        store
            .append_row(Sheet::Items, item.to_row_values(), false)
            .await?;
    }
    info!("Seeded {} catalog items", items.len());
    Ok(())
}
