//! Result list state.
//!
//! Items are addressed by position only. A removal index captured before a
//! refresh can land on a different item afterwards.

use crate::normalize::ResultItem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    items: Vec<ResultItem>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list after a successful search.
    pub fn replace(&mut self, items: Vec<ResultItem>) {
        self.items = items;
    }

    /// Remove the item at `index`, keeping the order of the rest.
    ///
    /// Returns `None` and leaves the list alone when `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<ResultItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&ResultItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
