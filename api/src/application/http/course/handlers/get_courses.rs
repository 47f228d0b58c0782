use axum::extract::{Path, RawQuery, State};
use course_library_core::domain::course::{
    entities::CourseDto, ports::CourseService, value_objects::GetCoursesInput,
};
use uuid::Uuid;

use crate::application::http::course::validators::CoursesQuery;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{author_id}/courses",
    tag = "course",
    summary = "Get courses for author",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        CoursesQuery,
    ),
    responses(
        (status = 200, body = Vec<CourseDto>),
        (status = 400, description = "Invalid sort expression", body = ApiErrorResponse),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_courses(
    Path(author_id): Path<Uuid>,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Response<Vec<CourseDto>>, ApiError> {
    let query = CoursesQuery::from_query_string(raw_query.as_deref().unwrap_or(""))?;

    let courses = state
        .service
        .get_courses(GetCoursesInput {
            author_id,
            order_by: query.order_by,
        })
        .await?;

    Ok(Response::OK(
        courses.into_iter().map(CourseDto::from).collect(),
    ))
}
