use axum::extract::State;
use course_library_core::domain::author::{entities::AuthorDto, ports::AuthorService};

use crate::application::http::{
    author::validators::CreateAuthorValidator,
    author_collection::validators::CreateAuthorCollectionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{WithHeader, created_at},
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "author-collection",
    summary = "Create author collection",
    description = "Creates every author in the array in one call. The Location header points at the collection of new ids.",
    responses(
        (status = 201, body = Vec<AuthorDto>),
        (status = 422, description = "Validation failed")
    ),
    request_body = Vec<CreateAuthorValidator>
)]
pub async fn create_author_collection(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateAuthorCollectionValidator>,
) -> Result<WithHeader<Vec<AuthorDto>>, ApiError> {
    let inputs = payload.authors.into_iter().map(Into::into).collect();
    let authors = state.service.create_authors(inputs).await?;

    let ids = authors
        .iter()
        .map(|author| author.id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let location = state.route(&format!("/api/authorcollections/({})", ids));

    Ok(created_at(
        location,
        authors.into_iter().map(AuthorDto::from).collect(),
    ))
}
