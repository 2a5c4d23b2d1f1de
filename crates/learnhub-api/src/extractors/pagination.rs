//! Pagination and sorting query parameters.

use serde::{Deserialize, Serialize};

use learnhub_core::types::pagination::PageRequest;
use learnhub_core::types::sorting::{SortDirection, SortField};

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Sort field (optional; unknown fields fall back to the default).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc" (default: "desc").
    pub sort_dir: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

impl PaginationParams {
    /// Split into a `PageRequest` and an optional sort specification.
    pub fn into_parts(self) -> (PageRequest, Option<SortField>) {
        let page = PageRequest::new(self.page, self.per_page);

        let sort = self.sort_by.map(|field| {
            let direction = match self.sort_dir.as_deref() {
                Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
                _ => SortDirection::Desc,
            };
            SortField::new(field, direction)
        });

        (page, sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        let (page, sort) = params.into_parts();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 25);
        assert!(sort.is_none());
    }

    #[test]
    fn test_sort_direction_parsing() {
        let params = PaginationParams {
            page: 1,
            per_page: 25,
            sort_by: Some("title".to_string()),
            sort_dir: Some("ASC".to_string()),
        };
        let (_, sort) = params.into_parts();
        let sort = sort.unwrap();
        assert_eq!(sort.field, "title");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_page_size_is_clamped() {
        let params = PaginationParams {
            page: 0,
            per_page: 9999,
            sort_by: None,
            sort_dir: None,
        };
        let (page, _) = params.into_parts();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
