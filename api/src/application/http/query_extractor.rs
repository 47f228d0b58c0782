use axum::{extract::FromRequestParts, http::request::Parts};
use course_library_core::domain::query::resource_parameters::ResourceQueryParameters;

use super::{query_params::ResourceQuery, server::api_entities::api_error::ApiError};

/// Extractor for collection shaping parameters (sort, paging, filters).
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ResourceQueryExtractor(params): ResourceQueryExtractor,
/// ) -> Result<Response<Vec<AuthorDto>>, ApiError> {
///     // params.order_by, params.page_number, ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceQueryExtractor(pub ResourceQueryParameters);

impl<S> FromRequestParts<S> for ResourceQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query = ResourceQuery::from_query_string(query_string)?;

        Ok(ResourceQueryExtractor(query.into()))
    }
}
