use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    api::Session,
    error::{AppError, AppResult},
    models::{Recommendation, RecommendationRequest, CONFIDENCE_SCORE_RANGE},
    services::providers::StoreProvider,
};

/// Runs one pass of the recommendation request lifecycle
///
/// Rejects the trigger when a request is already loading. Otherwise the
/// current preferences and history are snapshotted under the session lock,
/// the state enters `Loading`, and the backend is called with the snapshot.
/// The fetch runs in a spawned task so the lifecycle reaches a terminal
/// state even if the caller goes away; the lock is never held across the
/// fetch, so synchronous edits proceed while the request is in flight.
///
/// Returns once the lifecycle reaches `Succeeded` or `Failed`, propagating
/// the failure in the latter case.
pub async fn refresh_recommendations(
    session: Arc<RwLock<Session>>,
    provider: Arc<dyn StoreProvider>,
) -> AppResult<()> {
    let snapshot = {
        let mut session = session.write().await;
        session.begin_request()?
    };

    tracing::info!(
        history_len = snapshot.history.len(),
        price_range = %snapshot.preferences.price_range,
        "Recommendation request started"
    );

    let task = tokio::spawn(async move {
        let outcome = fetch_validated(provider, snapshot).await;

        let mut session = session.write().await;
        match outcome {
            Ok(recommendations) => {
                tracing::info!(
                    recommendation_count = recommendations.len(),
                    "Recommendation request succeeded"
                );
                session.complete_request(recommendations);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                session.fail_request();
                Err(e)
            }
        }
    });

    task.await.map_err(|e| AppError::Internal(e.to_string()))?
}

async fn fetch_validated(
    provider: Arc<dyn StoreProvider>,
    snapshot: RecommendationRequest,
) -> AppResult<Vec<Recommendation>> {
    let recommendations = provider.fetch_recommendations(snapshot).await?;
    validate_batch(recommendations)
}

/// Validates a delivered batch before it becomes visible
///
/// A single out-of-range confidence score fails the whole batch; a partially
/// trustworthy list is never surfaced.
fn validate_batch(batch: Vec<Recommendation>) -> AppResult<Vec<Recommendation>> {
    for entry in &batch {
        if !CONFIDENCE_SCORE_RANGE.contains(&entry.confidence_score) {
            return Err(AppError::Recommendation(format!(
                "confidence score {} for product {} is outside {:?}",
                entry.confidence_score, entry.product.id, CONFIDENCE_SCORE_RANGE
            )));
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        PreferencePatch, Product, ProductId, RequestState, RequestStatus,
    };
    use crate::services::providers::MockStoreProvider;
    use tokio::sync::Notify;

    fn sample_recommendation() -> Recommendation {
        Recommendation {
            product: Product {
                id: ProductId::from("p1"),
                name: "Trail Runner".to_string(),
                category: "Footwear".to_string(),
                brand: "Peak".to_string(),
                price: 89.99,
                rating: 4.6,
            },
            explanation: "matches your taste".to_string(),
            confidence_score: 8.1,
        }
    }

    /// Provider that parks inside the fetch until the test releases it
    struct GatedProvider {
        started: Notify,
        release: Notify,
        seen: std::sync::Mutex<Option<RecommendationRequest>>,
    }

    impl GatedProvider {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                started: Notify::new(),
                release: Notify::new(),
                seen: std::sync::Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl StoreProvider for GatedProvider {
        async fn fetch_catalog(&self) -> AppResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn fetch_recommendations(
            &self,
            request: RecommendationRequest,
        ) -> AppResult<Vec<Recommendation>> {
            *self.seen.lock().unwrap() = Some(request);
            self.started.notify_one();
            self.release.notified().await;
            Ok(vec![sample_recommendation()])
        }

        fn name(&self) -> &'static str {
            "gated"
        }
    }

    #[tokio::test]
    async fn test_refresh_stores_delivered_batch() {
        let session = Arc::new(RwLock::new(Session::default()));
        let mut provider = MockStoreProvider::new();
        provider
            .expect_fetch_recommendations()
            .times(1)
            .returning(|_| Ok(vec![sample_recommendation()]));

        refresh_recommendations(session.clone(), Arc::new(provider))
            .await
            .unwrap();

        let session = session.read().await;
        assert_eq!(session.request.status(), RequestStatus::Succeeded);
        assert_eq!(session.request.recommendations().map(<[_]>::len), Some(1));
        assert!(session.request.received_at().is_some());
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_success() {
        let session = Arc::new(RwLock::new(Session::default()));
        let mut provider = MockStoreProvider::new();
        provider
            .expect_fetch_recommendations()
            .returning(|_| Ok(Vec::new()));

        refresh_recommendations(session.clone(), Arc::new(provider))
            .await
            .unwrap();

        let session = session.read().await;
        assert_eq!(session.request.status(), RequestStatus::Succeeded);
        assert_eq!(session.request.recommendations(), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_backend_failure_lands_in_failed() {
        let session = Arc::new(RwLock::new(Session::default()));
        let mut provider = MockStoreProvider::new();
        provider.expect_fetch_recommendations().returning(|_| {
            Err(AppError::Recommendation("backend down".to_string()))
        });

        let result = refresh_recommendations(session.clone(), Arc::new(provider)).await;
        assert!(matches!(result, Err(AppError::Recommendation(_))));

        let session = session.read().await;
        assert_eq!(session.request, RequestState::Failed);
    }

    #[tokio::test]
    async fn test_failure_discards_previous_batch() {
        let session = Arc::new(RwLock::new(Session::default()));
        session
            .write()
            .await
            .complete_request(vec![sample_recommendation()]);

        let mut provider = MockStoreProvider::new();
        provider.expect_fetch_recommendations().returning(|_| {
            Err(AppError::Recommendation("backend down".to_string()))
        });

        let result = refresh_recommendations(session.clone(), Arc::new(provider)).await;
        assert!(result.is_err());

        let session = session.read().await;
        assert_eq!(session.request, RequestState::Failed);
        assert!(session.request.recommendations().is_none());
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_fails_the_batch() {
        let session = Arc::new(RwLock::new(Session::default()));
        let mut provider = MockStoreProvider::new();
        provider.expect_fetch_recommendations().returning(|_| {
            let mut entry = sample_recommendation();
            entry.confidence_score = 42.0;
            Ok(vec![entry])
        });

        let result = refresh_recommendations(session.clone(), Arc::new(provider)).await;
        assert!(matches!(result, Err(AppError::Recommendation(_))));

        let session = session.read().await;
        assert_eq!(session.request, RequestState::Failed);
    }

    #[tokio::test]
    async fn test_trigger_while_loading_is_rejected() {
        let session = Arc::new(RwLock::new(Session::default()));
        let provider = GatedProvider::new();

        let first = tokio::spawn(refresh_recommendations(
            session.clone(),
            provider.clone(),
        ));

        provider.started.notified().await;
        assert!(session.read().await.request.is_loading());

        let second = refresh_recommendations(session.clone(), provider.clone()).await;
        assert!(matches!(second, Err(AppError::RequestInFlight)));
        assert!(session.read().await.request.is_loading());

        provider.release.notify_one();
        first.await.unwrap().unwrap();

        let session = session.read().await;
        assert_eq!(session.request.status(), RequestStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_snapshot_insulated_from_later_edits() {
        let session = Arc::new(RwLock::new(Session::default()));
        {
            let mut session = session.write().await;
            session.preferences.price_range = "0-50".to_string();
            session.history.record(ProductId::from("p1"));
        }

        let provider = GatedProvider::new();
        let task = tokio::spawn(refresh_recommendations(
            session.clone(),
            provider.clone(),
        ));

        provider.started.notified().await;

        // Edits during flight affect only the next snapshot
        {
            let mut session = session.write().await;
            let patch = PreferencePatch {
                price_range: Some("200+".to_string()),
                ..Default::default()
            };
            let merged = session.preferences.merged(patch);
            session.preferences = merged;
            session.history.record(ProductId::from("p2"));
        }

        provider.release.notify_one();
        task.await.unwrap().unwrap();

        let seen = provider.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.preferences.price_range, "0-50");
        assert_eq!(seen.history, vec![ProductId::from("p1")]);

        let session = session.read().await;
        assert_eq!(session.preferences.price_range, "200+");
        assert_eq!(session.request.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_validate_batch_accepts_boundary_scores() {
        let mut low = sample_recommendation();
        low.confidence_score = 0.0;
        let mut high = sample_recommendation();
        high.confidence_score = 10.0;

        assert!(validate_batch(vec![low, high]).is_ok());
    }

    #[test]
    fn test_validate_batch_rejects_out_of_range_scores() {
        let mut too_high = sample_recommendation();
        too_high.confidence_score = 10.1;
        assert!(validate_batch(vec![too_high]).is_err());

        let mut negative = sample_recommendation();
        negative.confidence_score = -0.1;
        assert!(validate_batch(vec![negative]).is_err());
    }
}
