use axum::http::HeaderName;
use course_library_core::domain::query::{
    paged_list::PagedList, resource_parameters::ResourceQueryParameters,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    resource_uri::{ResourceUriType, create_resource_uri},
    server::api_entities::api_error::ApiError,
};

pub const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Metadata sent alongside a page of results in the `X-Pagination` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
}

impl PaginationMetadata {
    /// Links are only built when the page has a neighbour in that direction.
    pub fn new<T>(page: &PagedList<T>, route: &str, params: &ResourceQueryParameters) -> Self {
        Self {
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
            previous_page_link: page
                .has_previous()
                .then(|| create_resource_uri(route, params, ResourceUriType::PreviousPage)),
            next_page_link: page
                .has_next()
                .then(|| create_resource_uri(route, params, ResourceUriType::NextPage)),
        }
    }

    pub fn to_header(&self) -> Result<(HeaderName, String), ApiError> {
        let value = serde_json::to_string(self).map_err(|e| {
            ApiError::InternalServerError(format!("Failed to serialize pagination metadata: {}", e))
        })?;

        Ok((X_PAGINATION, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page_number: u64) -> ResourceQueryParameters {
        ResourceQueryParameters::new(None, Some(page_number), Some(10), None, None)
    }

    #[test]
    fn test_middle_page_has_both_links() {
        let page = PagedList::create((0..25).collect::<Vec<_>>(), 2, 10);
        let metadata = PaginationMetadata::new(&page, "/api/authors", &params(2));
        assert_eq!(
            metadata.previous_page_link.as_deref(),
            Some("/api/authors?orderBy=name&pageNumber=1&pageSize=10")
        );
        assert_eq!(
            metadata.next_page_link.as_deref(),
            Some("/api/authors?orderBy=name&pageNumber=3&pageSize=10")
        );
    }

    #[test]
    fn test_last_page_has_no_next_link() {
        let page = PagedList::create((0..25).collect::<Vec<_>>(), 3, 10);
        let metadata = PaginationMetadata::new(&page, "/api/authors", &params(3));
        assert_eq!(metadata.total_pages, 3);
        assert!(metadata.previous_page_link.is_some());
        assert_eq!(metadata.next_page_link, None);
    }

    #[test]
    fn test_header_is_camel_case_json() {
        let page = PagedList::<u8>::create(Vec::new(), 1, 10);
        let (name, value) = PaginationMetadata::new(&page, "/api/authors", &params(1))
            .to_header()
            .unwrap();
        assert_eq!(name.as_str(), "x-pagination");
        assert_eq!(
            value,
            r#"{"totalCount":0,"pageSize":10,"currentPage":1,"totalPages":0,"previousPageLink":null,"nextPageLink":null}"#
        );
    }
}
