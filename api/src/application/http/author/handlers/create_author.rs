use axum::extract::State;
use course_library_core::domain::author::{entities::AuthorDto, ports::AuthorService};

use crate::application::http::author::validators::CreateAuthorValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::{WithHeader, created_at},
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "author",
    summary = "Create author",
    description = "Creates an author, together with any courses given in the payload.",
    responses(
        (status = 201, body = AuthorDto),
        (status = 422, description = "Validation failed")
    ),
    request_body = CreateAuthorValidator
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateAuthorValidator>,
) -> Result<WithHeader<AuthorDto>, ApiError> {
    let author = state.service.create_author(payload.into()).await?;

    let location = state.route(&format!("/api/authors/{}", author.id));

    Ok(created_at(location, AuthorDto::from(author)))
}
