use serde::Serialize;

use super::ProductId;

/// Ordered record of the distinct products the user has clicked
///
/// Each id appears at most once, in the order of first interaction. The
/// sequence is never reordered and never truncated; only `clear` empties it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BrowsingHistory {
    entries: Vec<ProductId>,
}

impl BrowsingHistory {
    /// Records a click, appending the id only if it is not already present
    ///
    /// Returns whether the id was appended; a repeated click is a no-op.
    pub fn record(&mut self, id: ProductId) -> bool {
        if self.entries.contains(&id) {
            return false;
        }
        self.entries.push(id);
        true
    }

    /// Drops the entire history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.contains(id)
    }

    /// Recorded ids in first-click order
    pub fn ids(&self) -> &[ProductId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
