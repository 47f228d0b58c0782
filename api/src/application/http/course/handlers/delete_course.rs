use axum::extract::{Path, State};
use course_library_core::domain::course::{ports::CourseService, value_objects::DeleteCourseInput};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{author_id}/courses/{course_id}",
    tag = "course",
    summary = "Delete course",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 204),
        (status = 404, description = "Author or course not found")
    ),
)]
pub async fn delete_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_course(DeleteCourseInput {
            author_id,
            course_id,
        })
        .await?;

    Ok(Response::NoContent)
}
