use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for a catalog product, in whichever shape the feed emits it
///
/// Feeds send either string ids (`"prod42"`) or bare numeric ids (`42`).
/// Both deserialize losslessly and round-trip verbatim, so history entries
/// and recommendation requests always carry the id exactly as fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Text(String),
    Number(u64),
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Text(id) => write!(f, "{}", id),
            ProductId::Number(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Number(id)
    }
}

/// A product in the session catalog
///
/// Immutable once fetched; the feed's shape is trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub rating: f64,
}
