//! Domain Layer - Pagination Types
//!
//! Wire shape of one loaded page plus the client-side pagination state.

use serde::{Deserialize, Serialize};

/// One page of items as returned by a backend list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

/// Client-side pagination state
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`, maintained by the
/// constructor rather than checked at every use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl Pagination {
    /// Build pagination state from backend metadata, clamping the current
    /// page into the valid range
    pub fn new(current_page: u32, total_pages: u32, total_count: u64) -> Self {
        let upper = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, upper),
            total_pages,
            total_count,
        }
    }

    /// State before any load has happened
    pub fn empty() -> Self {
        Self { current_page: 1, total_pages: 0, total_count: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

impl<T> From<&Page<T>> for Pagination {
    fn from(page: &Page<T>) -> Self {
        Pagination::new(page.current_page, page.total_pages, page.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_clamped_into_range() {
        let p = Pagination::new(9, 3, 25);
        assert_eq!(p.current_page, 3);

        let p = Pagination::new(0, 3, 25);
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_empty_result_set_keeps_page_one() {
        let p = Pagination::new(1, 0, 0);
        assert_eq!(p.current_page, 1);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }

    #[test]
    fn test_page_wire_shape_is_camel_case() {
        let json = r#"{"items":[1,2],"currentPage":2,"totalPages":5,"totalCount":42}"#;
        let page: Page<u32> = serde_json::from_str(json).expect("parse page");
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_count, 42);
    }
}
