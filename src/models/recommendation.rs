use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::{PreferenceState, Product, ProductId};

/// Inclusive range a recommendation confidence score must fall within
pub const CONFIDENCE_SCORE_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// A single scored suggestion returned by the store feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    pub explanation: String,
    pub confidence_score: f64,
}

/// Snapshot of the taste signals sent with a recommendation request
///
/// Captured at the moment the request begins; later edits to preferences or
/// history do not alter a request already in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub preferences: PreferenceState,
    pub history: Vec<ProductId>,
}

/// Wire shape of the feed's recommendation payload
///
/// A payload without a `recommendations` field decodes as an empty batch.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
