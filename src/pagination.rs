//! Pagination utilities for Cloud Foundry v2 list responses.

use serde::{Deserialize, Serialize};

/// Largest page size the v2 API accepts.
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// The v2 list envelope.
///
/// Every v2 list endpoint wraps its results in this shape; `next_url` is
/// `null` on the final page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<R> {
    /// Total number of results across all pages.
    #[serde(default)]
    pub total_results: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Relative URL of the previous page.
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Relative URL of the next page.
    #[serde(default)]
    pub next_url: Option<String>,
    /// The resources on this page.
    #[serde(default = "Vec::new")]
    pub resources: Vec<R>,
}

/// A page of results from the Cloud Foundry API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_results: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Whether there are more pages.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a page from a v2 list envelope.
    #[must_use]
    pub fn from_response(response: PaginatedResponse<T>, page: u32) -> Self {
        Self {
            has_more: response.next_url.is_some(),
            items: response.resources,
            total_results: response.total_results,
            total_pages: response.total_pages,
            page,
        }
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_results: self.total_results,
            total_pages: self.total_pages,
            page: self.page,
            has_more: self.has_more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
