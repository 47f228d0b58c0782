use axum::extract::State;
use course_library_core::domain::author::{
    entities::{Author, AuthorDto},
    ports::AuthorService,
};
use tracing::debug;
use uuid::Uuid;

use crate::application::http::{
    key_binder::ArrayKeys,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

/// Fails with 404 unless every requested id was found.
pub fn ensure_all_found(requested: usize, authors: Vec<Author>) -> Result<Vec<Author>, ApiError> {
    if authors.len() != requested {
        debug!(requested, found = authors.len(), "author collection incomplete");
        return Err(ApiError::NotFound(
            "One or more authors were not found".to_string(),
        ));
    }

    Ok(authors)
}

#[utoipa::path(
    get,
    path = "/{ids}",
    tag = "author-collection",
    summary = "Get author collection",
    description = "Fetches several authors at once. `ids` is a comma separated list of author ids, optionally wrapped in parentheses.",
    params(
        ("ids" = String, Path, description = "e.g. (id1,id2)"),
    ),
    responses(
        (status = 200, body = Vec<AuthorDto>),
        (status = 400, description = "Malformed id list", body = ApiErrorResponse),
        (status = 404, description = "At least one author does not exist")
    ),
)]
pub async fn get_author_collection(
    State(state): State<AppState>,
    ArrayKeys(author_ids): ArrayKeys<Uuid>,
) -> Result<Response<Vec<AuthorDto>>, ApiError> {
    let requested = author_ids.len();
    let authors = state.service.get_authors_by_ids(author_ids).await?;
    let authors = ensure_all_found(requested, authors)?;

    Ok(Response::OK(
        authors.into_iter().map(AuthorDto::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn author(first_name: &str) -> Author {
        Author::new(
            first_name.to_string(),
            "Bonny".to_string(),
            NaiveDate::from_ymd_opt(1697, 3, 8).unwrap(),
            None,
            "Piracy".to_string(),
        )
    }

    #[test]
    fn test_all_found_passes_through() {
        let authors = ensure_all_found(2, vec![author("Anne"), author("Mary")]).unwrap();
        assert_eq!(authors.len(), 2);
    }

    #[test]
    fn test_missing_author_is_not_found() {
        let err = ensure_all_found(3, vec![author("Anne"), author("Mary")]).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
