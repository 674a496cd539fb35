//! Query state for the asset list page.
//!
//! One record funnels search text, status filter, sorting and pagination into
//! a single debounced fetch. The transition rules live here, free of any
//! browser API, so they are testable on the host.

use crate::models::{AssetSearchParams, AssetStatus, SortDir};

/// Quiescence window before a query-state change triggers a fetch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default page size, owned by the client rather than the backend.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AssetQuery {
    pub query: String,
    pub status: Option<AssetStatus>,
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            status: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: "id".to_string(),
            sort_dir: SortDir::Asc,
        }
    }
}

impl AssetQuery {
    /// A new filter invalidates the pagination position.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 0;
        }
    }

    /// Same rule as [`Self::set_query`]: changing the filter resets the page.
    pub fn set_status(&mut self, status: Option<AssetStatus>) {
        if status != self.status {
            self.status = status;
            self.page = 0;
        }
    }

    /// Clicking an already-sorted column flips the direction; a new column
    /// sorts ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_by == column {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_by = column.to_string();
            self.sort_dir = SortDir::Asc;
        }
    }

    /// Direction indicator for a column header, when sorted by it.
    pub fn sort_indicator(&self, column: &str) -> Option<SortDir> {
        (self.sort_by == column).then_some(self.sort_dir)
    }

    /// Moving between pages keeps the filters untouched.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn to_params(&self) -> AssetSearchParams {
        AssetSearchParams {
            query: (!self.query.is_empty()).then(|| self.query.clone()),
            status: self.status,
            serial_number: None,
            assigned_to_user_id: None,
            page: Some(self.page),
            size: Some(self.size),
            sort_by: Some(self.sort_by.clone()),
            sort_dir: Some(self.sort_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_change_resets_page() {
        let mut q = AssetQuery::default();
        q.set_page(3);
        q.set_query("macbook");
        assert_eq!(q.page, 0);
        assert_eq!(q.query, "macbook");
    }

    #[test]
    fn unchanged_query_keeps_page() {
        let mut q = AssetQuery::default();
        q.set_query("macbook");
        q.set_page(2);
        q.set_query("macbook");
        assert_eq!(q.page, 2);
    }

    #[test]
    fn status_change_resets_page() {
        let mut q = AssetQuery::default();
        q.set_page(5);
        q.set_status(Some(AssetStatus::Broken));
        assert_eq!(q.page, 0);

        q.set_page(2);
        q.set_status(Some(AssetStatus::Broken));
        assert_eq!(q.page, 2, "same status must not reset the page");
    }

    #[test]
    fn sort_toggles_direction_on_same_column() {
        let mut q = AssetQuery::default();
        q.toggle_sort("name");
        assert_eq!(q.sort_by, "name");
        assert_eq!(q.sort_dir, SortDir::Asc);

        q.toggle_sort("name");
        assert_eq!(q.sort_dir, SortDir::Desc);

        q.toggle_sort("name");
        assert_eq!(q.sort_dir, SortDir::Asc);
    }

    #[test]
    fn sort_resets_to_asc_on_new_column() {
        let mut q = AssetQuery::default();
        q.toggle_sort("name");
        q.toggle_sort("name");
        assert_eq!(q.sort_dir, SortDir::Desc);

        q.toggle_sort("purchasePrice");
        assert_eq!(q.sort_by, "purchasePrice");
        assert_eq!(q.sort_dir, SortDir::Asc);
    }

    #[test]
    fn paging_does_not_touch_filters() {
        let mut q = AssetQuery::default();
        q.set_query("dell");
        q.set_status(Some(AssetStatus::Available));
        q.set_page(4);
        assert_eq!(q.query, "dell");
        assert_eq!(q.status, Some(AssetStatus::Available));
        assert_eq!(q.page, 4);
    }

    #[test]
    fn params_omit_empty_query() {
        let q = AssetQuery::default();
        let params = q.to_params();
        assert_eq!(params.query, None);
        assert_eq!(params.page, Some(0));
        assert_eq!(params.size, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(params.sort_by.as_deref(), Some("id"));
        assert_eq!(params.sort_dir, Some(SortDir::Asc));
    }
}
