use serde::{Deserialize, Serialize};

use crate::domain::author::entities::DEFAULT_AUTHOR_ORDER_BY;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 20;

/// Shaping parameters of a collection request.
///
/// Every field except `page_number` is carried unchanged into pagination links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQueryParameters {
    pub order_by: String,
    pub page_number: u64,
    pub page_size: u64,
    pub main_category: Option<String>,
    pub search_query: Option<String>,
}

impl Default for ResourceQueryParameters {
    fn default() -> Self {
        Self {
            order_by: DEFAULT_AUTHOR_ORDER_BY.to_string(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            main_category: None,
            search_query: None,
        }
    }
}

impl ResourceQueryParameters {
    pub fn new(
        order_by: Option<String>,
        page_number: Option<u64>,
        page_size: Option<u64>,
        main_category: Option<String>,
        search_query: Option<String>,
    ) -> Self {
        Self {
            order_by: order_by.unwrap_or_else(|| DEFAULT_AUTHOR_ORDER_BY.to_string()),
            page_number: page_number.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            main_category: non_blank(main_category),
            search_query: non_blank(search_query),
        }
    }

    /// Same parameters pointing at another page.
    pub fn with_page(&self, page_number: u64) -> Self {
        Self {
            page_number,
            ..self.clone()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ResourceQueryParameters::new(None, None, None, None, None);
        assert_eq!(params, ResourceQueryParameters::default());
    }

    #[test]
    fn test_default_order_matches_author_mapping() {
        use crate::domain::author::entities::author_property_mapping;

        assert_eq!(
            ResourceQueryParameters::default().order_by,
            author_property_mapping().default_property()
        );
    }

    #[test]
    fn test_paging_is_clamped() {
        let params = ResourceQueryParameters::new(None, Some(0), Some(500), None, None);
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, MAX_PAGE_SIZE);

        let params = ResourceQueryParameters::new(None, Some(4), Some(0), None, None);
        assert_eq!(params.page_number, 4);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let params = ResourceQueryParameters::new(
            None,
            None,
            None,
            Some("  ".to_string()),
            Some(" Rum ".to_string()),
        );
        assert_eq!(params.main_category, None);
        assert_eq!(params.search_query.as_deref(), Some("Rum"));
    }
}
