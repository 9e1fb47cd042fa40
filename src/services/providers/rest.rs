use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Product, Recommendation, RecommendationRequest, RecommendationResponse},
    services::providers::StoreProvider,
};

/// REST implementation of the store backend
///
/// Talks plain JSON to the product feed:
/// `GET {base}/products` for the catalog and `POST {base}/recommendations`
/// for personalized suggestions.
#[derive(Clone)]
pub struct RestStoreProvider {
    http_client: HttpClient,
    api_url: String,
}

impl RestStoreProvider {
    /// Creates a provider against the given base URL
    ///
    /// The timeout applies to every outbound call; a timed-out call surfaces
    /// as an ordinary failure.
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl StoreProvider for RestStoreProvider {
    async fn fetch_catalog(&self) -> AppResult<Vec<Product>> {
        let url = self.endpoint("products");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CatalogFetch(format!(
                "feed returned status {}: {}",
                status, body
            )));
        }

        let products: Vec<Product> = response.json().await?;

        tracing::info!(
            product_count = products.len(),
            provider = self.name(),
            "Catalog fetched"
        );

        Ok(products)
    }

    async fn fetch_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>> {
        let url = self.endpoint("recommendations");

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Recommendation(format!(
                "recommendation endpoint returned status {}: {}",
                status, body
            )));
        }

        let payload: RecommendationResponse = response.json().await?;

        tracing::info!(
            recommendation_count = payload.recommendations.len(),
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(payload.recommendations)
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}
