use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Price-range labels the preference form offers
///
/// `price_range` is not validated against this list; an unrecognized label
/// passes through to the recommendation service untouched.
pub const PRICE_RANGES: [&str; 5] = ["all", "0-50", "50-100", "100-200", "200+"];

/// Stated user preferences, sent with every recommendation request
///
/// Field casing follows the recommendation service contract. The tag sets
/// carry no duplicates and no meaningful order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    pub price_range: String,
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            price_range: "all".to_string(),
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
        }
    }
}

impl PreferenceState {
    /// Shallow-merges a patch into this state, returning the merged copy
    ///
    /// `Some` fields replace the current value wholesale; `None` fields are
    /// carried over unchanged. Multi-select fields arrive as complete sets,
    /// so no set algebra happens here.
    pub fn merged(&self, patch: PreferencePatch) -> PreferenceState {
        PreferenceState {
            price_range: patch
                .price_range
                .unwrap_or_else(|| self.price_range.clone()),
            categories: patch.categories.unwrap_or_else(|| self.categories.clone()),
            brands: patch.brands.unwrap_or_else(|| self.brands.clone()),
        }
    }
}

/// Partial preference edit submitted by the surface
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencePatch {
    pub price_range: Option<String>,
    pub categories: Option<BTreeSet<String>>,
    pub brands: Option<BTreeSet<String>>,
}
