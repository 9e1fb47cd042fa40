use std::sync::Arc;

use crate::{error::AppResult, models::Product, services::providers::StoreProvider};

/// Loads the full product catalog from the store backend
///
/// The caller replaces its catalog only on success; on failure nothing is
/// touched and the error propagates, so the previous catalog stays in place.
pub async fn load_catalog(provider: Arc<dyn StoreProvider>) -> AppResult<Vec<Product>> {
    let products = provider.fetch_catalog().await?;

    tracing::info!(product_count = products.len(), "Catalog loaded");

    Ok(products)
}
