use axum::extract::State;
use course_library_core::domain::{
    author::{entities::Author, entities::AuthorDto, ports::AuthorService},
    query::{paged_list::PagedList, resource_parameters::ResourceQueryParameters},
};

use crate::application::http::{
    pagination::PaginationMetadata,
    query_extractor::ResourceQueryExtractor,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::{Response, WithHeader},
        },
        app_state::AppState,
    },
};

/// The page body plus its `X-Pagination` header, with links built from the same
/// parameters that produced the page.
pub fn authors_page_response(
    page: PagedList<Author>,
    route: &str,
    params: &ResourceQueryParameters,
) -> Result<WithHeader<Vec<AuthorDto>>, ApiError> {
    let header = PaginationMetadata::new(&page, route, params).to_header()?;
    let authors = page.items.into_iter().map(AuthorDto::from).collect();

    Ok(([header], Response::OK(authors)))
}

#[utoipa::path(
    get,
    path = "",
    tag = "author",
    summary = "Get authors",
    description = "Lists authors filtered by main category or search query, ordered by `orderBy` and paged. Pagination metadata is returned in the `X-Pagination` header.",
    params(crate::application::http::query_params::ResourceQuery),
    responses(
        (status = 200, body = Vec<AuthorDto>, headers(
            ("X-Pagination" = String, description = "JSON pagination metadata with previous and next page links")
        )),
        (status = 400, description = "Invalid sort expression or query string", body = ApiErrorResponse)
    )
)]
pub async fn get_authors(
    State(state): State<AppState>,
    ResourceQueryExtractor(params): ResourceQueryExtractor,
) -> Result<WithHeader<Vec<AuthorDto>>, ApiError> {
    let page = state.service.get_authors(params.clone()).await?;

    authors_page_response(page, &state.route("/api/authors"), &params)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;

    use super::*;
    use crate::application::http::pagination::X_PAGINATION;

    fn author(first_name: &str) -> Author {
        Author::new(
            first_name.to_string(),
            "Read".to_string(),
            NaiveDate::from_ymd_opt(1690, 1, 1).unwrap(),
            None,
            "Piracy".to_string(),
        )
    }

    #[test]
    fn test_header_links_follow_request_parameters() {
        let params = ResourceQueryParameters::new(
            Some("-age".to_string()),
            Some(2),
            Some(1),
            Some("Piracy".to_string()),
            None,
        );
        let page = PagedList::create(
            vec![author("Anne"), author("Mary"), author("Jack")],
            params.page_number,
            params.page_size,
        );

        let response = authors_page_response(page, "/api/authors", &params)
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let metadata: PaginationMetadata = serde_json::from_str(
            response
                .headers()
                .get(X_PAGINATION)
                .unwrap()
                .to_str()
                .unwrap(),
        )
        .unwrap();

        assert_eq!(metadata.current_page, 2);
        assert_eq!(metadata.total_pages, 3);
        assert_eq!(
            metadata.previous_page_link.as_deref(),
            Some("/api/authors?orderBy=-age&pageNumber=1&pageSize=1&mainCategory=Piracy")
        );
        assert_eq!(
            metadata.next_page_link.as_deref(),
            Some("/api/authors?orderBy=-age&pageNumber=3&pageSize=1&mainCategory=Piracy")
        );
    }

    #[test]
    fn test_single_page_has_no_links() {
        let params = ResourceQueryParameters::default();
        let page = PagedList::create(vec![author("Anne")], 1, params.page_size);

        let ([(_, value)], body) = authors_page_response(page, "/api/authors", &params).unwrap();
        let metadata: PaginationMetadata = serde_json::from_str(&value).unwrap();

        assert_eq!(metadata.previous_page_link, None);
        assert_eq!(metadata.next_page_link, None);
        match body {
            Response::OK(authors) => assert_eq!(authors[0].name, "Anne Read"),
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
