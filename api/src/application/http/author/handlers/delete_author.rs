use axum::extract::{Path, State};
use course_library_core::domain::author::{ports::AuthorService, value_objects::DeleteAuthorInput};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{author_id}",
    tag = "author",
    summary = "Delete author",
    description = "Deletes an author and all of their courses.",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
    ),
    responses(
        (status = 204),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn delete_author(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_author(DeleteAuthorInput { author_id })
        .await?;

    Ok(Response::NoContent)
}
