//! Query parameters for list operations.

use serde::Serialize;

/// Query parameters shared by the article and product list endpoints.
///
/// Serialized as `page`, `pageSize`, and `keyword`; the keyword is always
/// sent (empty string when absent) and URL-encoded by the HTTP layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Search keyword (empty matches everything).
    pub keyword: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            keyword: String::new(),
        }
    }
}

impl ListQuery {
    /// Create query params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            keyword: String::new(),
        }
    }

    /// Set the search keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
}
