/// Store backend abstraction
///
/// One provider covers both halves of the store contract: the product feed
/// the catalog is loaded from, and the recommendation endpoint preference
/// snapshots are sent to. Using the same provider for both keeps product ids
/// consistent between the catalog and the recommendations that reference it.
use crate::{
    error::AppResult,
    models::{Product, Recommendation, RecommendationRequest},
};

pub mod rest;

pub use rest::RestStoreProvider;

/// Trait for store backend providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StoreProvider: Send + Sync {
    /// Fetch the full product catalog
    async fn fetch_catalog(&self) -> AppResult<Vec<Product>>;

    /// Request personalized recommendations for a preference/history snapshot
    ///
    /// The snapshot is taken by value: it is the sole input to the backend,
    /// and the backend's ranking logic is opaque to this crate.
    async fn fetch_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
