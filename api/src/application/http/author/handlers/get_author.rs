use axum::extract::{Path, State};
use course_library_core::domain::author::{
    entities::AuthorDto, ports::AuthorService, value_objects::GetAuthorInput,
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{author_id}",
    tag = "author",
    summary = "Get author",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
    ),
    responses(
        (status = 200, body = AuthorDto),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_author(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<AuthorDto>, ApiError> {
    let author = state
        .service
        .get_author(GetAuthorInput { author_id })
        .await?;

    Ok(Response::OK(AuthorDto::from(author)))
}
