use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// PAGINATION
// =============================================================================

/// One page of a larger result set.
///
/// `total` counts every row matching the query before paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pagination<T> {
    /// Page number (1-indexed)
    pub current_page: i64,
    /// Requested page size
    pub per_page: i64,
    /// Number of matching rows across all pages
    pub total: i64,
    /// Items on this page, in query order
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: i64, per_page: i64, total: i64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Convert every item while keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
