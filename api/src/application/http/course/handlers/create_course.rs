use axum::extract::{Path, State};
use course_library_core::domain::course::{entities::CourseDto, ports::CourseService};
use uuid::Uuid;

use crate::application::http::course::validators::CreateCourseValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::{WithHeader, created_at},
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/{author_id}/courses",
    tag = "course",
    summary = "Create course for author",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
    ),
    responses(
        (status = 201, body = CourseDto),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Validation failed")
    ),
    request_body = CreateCourseValidator
)]
pub async fn create_course(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCourseValidator>,
) -> Result<WithHeader<CourseDto>, ApiError> {
    let course = state
        .service
        .create_course(author_id, payload.into())
        .await?;

    let location = state.route(&format!(
        "/api/authors/{}/courses/{}",
        author_id, course.id
    ));

    Ok(created_at(location, CourseDto::from(course)))
}
