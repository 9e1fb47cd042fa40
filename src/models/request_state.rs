use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Recommendation;

/// Lifecycle of the current recommendation request
///
/// Exactly one state holds at a time. A new batch becomes visible only
/// through `Succeeded`; a failure discards any previously held batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        recommendations: Vec<Recommendation>,
        received_at: DateTime<Utc>,
    },
    Failed,
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Current batch, present only in the succeeded state
    pub fn recommendations(&self) -> Option<&[Recommendation]> {
        match self {
            RequestState::Succeeded {
                recommendations, ..
            } => Some(recommendations),
            _ => None,
        }
    }

    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        match self {
            RequestState::Succeeded { received_at, .. } => Some(*received_at),
            _ => None,
        }
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            RequestState::Idle => RequestStatus::Idle,
            RequestState::Loading => RequestStatus::Loading,
            RequestState::Succeeded { .. } => RequestStatus::Succeeded,
            RequestState::Failed => RequestStatus::Failed,
        }
    }
}

/// Flat status tag reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}
