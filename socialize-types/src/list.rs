//! Paged list results.

use serde::{Deserialize, Serialize};

/// A page of items plus the total number of matches on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: usize,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }

    /// A result whose total count equals the page size.
    pub fn from_items(items: Vec<T>) -> Self {
        let total_count = items.len();
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes the first item, dropping the rest.
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A half-open `[start, end)` window into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The window holding only the first item.
    pub const fn first() -> Self {
        Self { start: 0, end: 1 }
    }

    pub const fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self { start: 0, end: 100 }
    }
}
