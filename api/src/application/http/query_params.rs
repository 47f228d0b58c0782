use course_library_core::domain::query::resource_parameters::ResourceQueryParameters;
use serde::Deserialize;
use utoipa::IntoParams;

use super::server::api_entities::api_error::ApiError;

/// Raw shaping parameters as they arrive in the query string.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResourceQuery {
    /// Comma separated properties, prefix with `-` for descending (default: name)
    pub order_by: Option<String>,
    /// 1-based page number (default: 1)
    pub page_number: Option<u64>,
    /// Page size (default: 10, max: 20)
    pub page_size: Option<u64>,
    /// Exact main category match
    pub main_category: Option<String>,
    /// Substring searched in main category, first and last name
    pub search_query: Option<String>,
}

impl ResourceQuery {
    /// Parses a raw query string such as `orderBy=-age&pageSize=5`.
    pub fn from_query_string(query: &str) -> Result<Self, ApiError> {
        serde_urlencoded::from_str(query)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))
    }
}

impl From<ResourceQuery> for ResourceQueryParameters {
    fn from(query: ResourceQuery) -> Self {
        ResourceQueryParameters::new(
            query.order_by,
            query.page_number,
            query.page_size,
            query.main_category,
            query.search_query,
        )
    }
}

#[cfg(test)]
mod tests {
    use course_library_core::domain::query::resource_parameters::MAX_PAGE_SIZE;

    use super::*;

    #[test]
    fn test_parse_all_parameters() {
        let query = ResourceQuery::from_query_string(
            "orderBy=-mainCategory%2Cname&pageNumber=2&pageSize=5&mainCategory=Rum&searchQuery=ar",
        )
        .unwrap();
        let params = ResourceQueryParameters::from(query);
        assert_eq!(params.order_by, "-mainCategory,name");
        assert_eq!(params.page_number, 2);
        assert_eq!(params.page_size, 5);
        assert_eq!(params.main_category.as_deref(), Some("Rum"));
        assert_eq!(params.search_query.as_deref(), Some("ar"));
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let params = ResourceQueryParameters::from(ResourceQuery::from_query_string("").unwrap());
        assert_eq!(params, ResourceQueryParameters::default());
    }

    #[test]
    fn test_page_size_is_capped() {
        let query = ResourceQuery::from_query_string("pageSize=1000&pageNumber=0").unwrap();
        let params = ResourceQueryParameters::from(query);
        assert_eq!(params.page_size, MAX_PAGE_SIZE);
        assert_eq!(params.page_number, 1);
    }

    #[test]
    fn test_non_numeric_page_is_rejected() {
        let err = ResourceQuery::from_query_string("pageNumber=two").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
