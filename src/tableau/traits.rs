//! Common traits for Tableau resources

use serde::Deserialize;

/// Common trait for all Tableau resources (users, workbooks, flows, ...)
///
/// Provides a unified interface for resource identification and matching,
/// which the CRUD and favorite commands rely on.
pub trait TabResource {
    /// Get the resource LUID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }

    /// Check if the resource name contains the given filter (substring match)
    fn matches_filter(&self, filter: &str) -> bool {
        self.name().contains(filter)
    }
}

/// Pagination block returned by paged list endpoints
///
/// The server encodes the numbers as JSON strings, so the raw fields are kept
/// private and exposed through parsing accessors.
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "pageNumber")]
    page_number: String,
    #[serde(rename = "pageSize")]
    page_size: String,
    #[serde(rename = "totalAvailable")]
    total_available: String,
}

impl Pagination {
    /// Current page number (1-based)
    pub fn page_number(&self) -> u32 {
        self.page_number.parse().unwrap_or(0)
    }

    /// Page size used for the request
    pub fn page_size(&self) -> u32 {
        self.page_size.parse().unwrap_or(0)
    }

    /// Total number of items available across all pages
    pub fn total_available(&self) -> u32 {
        self.total_available.parse().unwrap_or(0)
    }
}

/// Trait for API responses that contain paged data
///
/// Implement this for any `XsResponse` struct to enable use with
/// `TabClient::fetch_all_pages()`. Each collection has its own envelope key
/// (`"users": {"user": [...]}`), so the wrapper stays per-resource.
pub trait PagedResponse<T> {
    /// Consume self and return the items of this page
    fn into_items(self) -> Vec<T>;
    /// Get reference to the pagination block, if present
    fn pagination(&self) -> Option<&Pagination>;
}
