pub mod display;
pub mod history;
pub mod preferences;
pub mod product;
pub mod recommendation;
pub mod request_state;

pub use display::{DisplayFilterState, SortKey, TagFilter};
pub use history::BrowsingHistory;
pub use preferences::{PreferencePatch, PreferenceState, PRICE_RANGES};
pub use product::{Product, ProductId};
pub use recommendation::{
    Recommendation, RecommendationRequest, RecommendationResponse, CONFIDENCE_SCORE_RANGE,
};
pub use request_state::{RequestState, RequestStatus};
