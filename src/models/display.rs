use serde::{Deserialize, Serialize};

/// Catalog view constraint on a single tag dimension
///
/// Serialized as the bare tag, with `"all"` meaning unconstrained, which is
/// the shape the filter form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl From<String> for TagFilter {
    fn from(value: String) -> Self {
        if value == "all" {
            TagFilter::All
        } else {
            TagFilter::Tag(value)
        }
    }
}

impl From<TagFilter> for String {
    fn from(filter: TagFilter) -> Self {
        match filter {
            TagFilter::All => "all".to_string(),
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl TagFilter {
    /// Returns true when the given tag passes this filter
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(wanted) => wanted == tag,
        }
    }
}

/// Sort applied to the filtered catalog view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Rating,
}

/// Transient catalog view constraints
///
/// Affects only what the catalog view shows. Never persisted, never part of
/// a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFilterState {
    #[serde(default)]
    pub category: TagFilter,
    #[serde(default)]
    pub brand: TagFilter,
    #[serde(default)]
    pub sort_by: SortKey,
}
