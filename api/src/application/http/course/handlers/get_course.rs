use axum::extract::{Path, State};
use course_library_core::domain::course::{
    entities::CourseDto, ports::CourseService, value_objects::GetCourseInput,
};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{author_id}/courses/{course_id}",
    tag = "course",
    summary = "Get course",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, body = CourseDto),
        (status = 404, description = "Author or course not found")
    ),
)]
pub async fn get_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<CourseDto>, ApiError> {
    let course = state
        .service
        .get_course(GetCourseInput {
            author_id,
            course_id,
        })
        .await?;

    Ok(Response::OK(CourseDto::from(course)))
}
