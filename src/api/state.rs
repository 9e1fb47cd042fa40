use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        BrowsingHistory, DisplayFilterState, PreferenceState, Product, Recommendation,
        RecommendationRequest, RequestState,
    },
    services::providers::StoreProvider,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub provider: Arc<dyn StoreProvider>,
}

impl AppState {
    /// Creates a fresh session around the given store provider
    pub fn new(provider: Arc<dyn StoreProvider>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            provider,
        }
    }
}

/// The single owned container for all session state
///
/// Every mutation goes through a handler holding the write lock; reads
/// derive their views from the current fields and never cache them.
#[derive(Debug, Default)]
pub struct Session {
    pub catalog: Vec<Product>,
    pub preferences: PreferenceState,
    pub filters: DisplayFilterState,
    pub history: BrowsingHistory,
    pub request: RequestState,
}

impl Session {
    /// Starts the recommendation lifecycle, snapshotting its inputs
    ///
    /// Rejects the trigger when a request is already loading. Otherwise the
    /// current preferences and history are captured and the state enters
    /// `Loading`. Run under the write lock so the check and the snapshot
    /// are atomic.
    pub fn begin_request(&mut self) -> AppResult<RecommendationRequest> {
        if self.request.is_loading() {
            return Err(AppError::RequestInFlight);
        }

        self.request = RequestState::Loading;

        Ok(RecommendationRequest {
            preferences: self.preferences.clone(),
            history: self.history.ids().to_vec(),
        })
    }

    /// Lands the lifecycle in `Succeeded` with the delivered batch
    pub fn complete_request(&mut self, recommendations: Vec<Recommendation>) {
        self.request = RequestState::Succeeded {
            recommendations,
            received_at: Utc::now(),
        };
    }

    /// Lands the lifecycle in `Failed`, discarding any previous batch
    pub fn fail_request(&mut self) {
        self.request = RequestState::Failed;
    }
}
