use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{
    DisplayFilterState, PreferencePatch, PreferenceState, Product, ProductId, Recommendation,
    RequestStatus, PRICE_RANGES,
};
use crate::services::{catalog, recommend, view, view::CatalogFacets};

use super::state::Session;
use super::AppState;

// Request/Response types

/// Catalog view under the active display filters
#[derive(Debug, Serialize)]
pub struct CatalogViewResponse {
    pub items: Vec<Product>,
    pub filters: DisplayFilterState,
    pub facets: CatalogFacets,
}

/// Preference form state: current values plus the options to offer
#[derive(Debug, Serialize)]
pub struct PreferenceFormResponse {
    pub preferences: PreferenceState,
    pub price_ranges: Vec<String>,
    pub facets: CatalogFacets,
}

#[derive(Debug, Deserialize)]
pub struct RecordClickRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub ids: Vec<ProductId>,
    pub products: Vec<Product>,
}

/// Recommendation lifecycle view
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub status: RequestStatus,
    pub is_loading: bool,
    pub recommendations: Vec<Recommendation>,
    pub received_at: Option<DateTime<Utc>>,
}

fn catalog_view(session: &Session) -> CatalogViewResponse {
    CatalogViewResponse {
        items: view::derive(&session.catalog, &session.filters),
        filters: session.filters.clone(),
        facets: view::facets(&session.catalog),
    }
}

fn history_view(session: &Session) -> HistoryResponse {
    HistoryResponse {
        ids: session.history.ids().to_vec(),
        products: view::history_products(&session.catalog, session.history.ids()),
    }
}

fn recommendations_view(session: &Session) -> RecommendationsResponse {
    RecommendationsResponse {
        status: session.request.status(),
        is_loading: session.request.is_loading(),
        recommendations: session.request.recommendations().unwrap_or_default().to_vec(),
        received_at: session.request.received_at(),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the catalog view, derived fresh from the current state
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogViewResponse> {
    let session = state.session.read().await;
    Json(catalog_view(&session))
}

/// Re-fetch the product catalog from the feed
///
/// On failure the previous catalog is retained and the error surfaces to
/// the caller.
pub async fn reload_catalog(
    State(state): State<AppState>,
) -> AppResult<Json<CatalogViewResponse>> {
    let products = catalog::load_catalog(state.provider.clone()).await?;

    let mut session = state.session.write().await;
    session.catalog = products;

    Ok(Json(catalog_view(&session)))
}

/// Replace the display filter state wholesale
pub async fn set_filters(
    State(state): State<AppState>,
    Json(filters): Json<DisplayFilterState>,
) -> Json<CatalogViewResponse> {
    let mut session = state.session.write().await;
    session.filters = filters;
    Json(catalog_view(&session))
}

/// Get the preference form state
pub async fn get_preferences(State(state): State<AppState>) -> Json<PreferenceFormResponse> {
    let session = state.session.read().await;
    Json(PreferenceFormResponse {
        preferences: session.preferences.clone(),
        price_ranges: PRICE_RANGES.iter().map(|label| label.to_string()).collect(),
        facets: view::facets(&session.catalog),
    })
}

/// Apply a partial preference edit
///
/// Fields present in the patch replace their previous value wholesale;
/// absent fields are untouched.
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(patch): Json<PreferencePatch>,
) -> Json<PreferenceState> {
    let mut session = state.session.write().await;
    let merged = session.preferences.merged(patch);
    session.preferences = merged;
    Json(session.preferences.clone())
}

/// Get the browsing history with its joined products
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let session = state.session.read().await;
    Json(history_view(&session))
}

/// Record a product click
///
/// The id must reference a product in the current catalog; repeat clicks
/// are no-ops.
pub async fn record_click(
    State(state): State<AppState>,
    Json(request): Json<RecordClickRequest>,
) -> AppResult<Json<HistoryResponse>> {
    let RecordClickRequest { product_id } = request;

    let mut session = state.session.write().await;

    if !session.catalog.iter().any(|p| p.id == product_id) {
        return Err(AppError::NotFound(format!(
            "product {} is not in the catalog",
            product_id
        )));
    }

    let newly_recorded = session.history.record(product_id.clone());
    tracing::debug!(product_id = %product_id, newly_recorded, "Product click");

    Ok(Json(history_view(&session)))
}

/// Clear the browsing history
pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    let mut session = state.session.write().await;
    session.history.clear();
    StatusCode::NO_CONTENT
}

/// Get the recommendation lifecycle view
pub async fn get_recommendations(State(state): State<AppState>) -> Json<RecommendationsResponse> {
    let session = state.session.read().await;
    Json(recommendations_view(&session))
}

/// Trigger a new recommendation request
///
/// Responds once the request reaches a terminal state. A trigger while a
/// request is already loading is rejected with a conflict.
pub async fn refresh_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<RecommendationsResponse>> {
    recommend::refresh_recommendations(state.session.clone(), state.provider.clone()).await?;

    let session = state.session.read().await;
    Ok(Json(recommendations_view(&session)))
}
