use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        .route("/catalog/reload", post(handlers::reload_catalog))
        .route("/filters", put(handlers::set_filters))
        // Preferences
        .route("/preferences", get(handlers::get_preferences))
        .route("/preferences", patch(handlers::update_preferences))
        // Browsing history
        .route("/history", get(handlers::get_history))
        .route("/history", post(handlers::record_click))
        .route("/history", delete(handlers::clear_history))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .route(
            "/recommendations/refresh",
            post(handlers::refresh_recommendations),
        )
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
