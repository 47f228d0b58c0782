use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response as AxumResponse},
};
use course_library_core::domain::course::{
    entities::CourseDto,
    ports::CourseService,
    value_objects::{UpsertCourseInput, UpsertOutcome},
};
use uuid::Uuid;

use crate::application::http::course::validators::UpdateCourseValidator;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::{Response, created_at},
    },
    app_state::AppState,
};

pub(super) fn course_location(state: &AppState, author_id: Uuid, course_id: Uuid) -> String {
    state.route(&format!("/api/authors/{}/courses/{}", author_id, course_id))
}

/// 201 with the new course at `location` when the upsert created it, 204 otherwise.
pub(super) fn upsert_response(outcome: UpsertOutcome, location: String) -> AxumResponse {
    match outcome {
        UpsertOutcome::Created(course) => {
            created_at(location, CourseDto::from(course)).into_response()
        }
        UpsertOutcome::Updated(_) => Response::<()>::NoContent.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/{author_id}/courses/{course_id}",
    tag = "course",
    summary = "Replace course",
    description = "Replaces a course, creating it under the given id when it does not exist yet.",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 201, body = CourseDto),
        (status = 204),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Validation failed")
    ),
    request_body = UpdateCourseValidator
)]
pub async fn update_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateCourseValidator>,
) -> Result<AxumResponse, ApiError> {
    let outcome = state
        .service
        .upsert_course(UpsertCourseInput {
            author_id,
            course_id,
            title: payload.title,
            description: Some(payload.description),
        })
        .await?;

    Ok(upsert_response(
        outcome,
        course_location(&state, author_id, course_id),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use course_library_core::domain::course::entities::Course;

    use super::*;

    fn course() -> Course {
        Course::with_id(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Rigging".to_string(),
            Some("Ropes".to_string()),
        )
    }

    #[test]
    fn test_created_upsert_is_201_with_location() {
        let response = upsert_response(
            UpsertOutcome::Created(course()),
            "/api/authors/a/courses/c".to_string(),
        );

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/api/authors/a/courses/c"
        );
    }

    #[test]
    fn test_updated_upsert_is_204_without_location() {
        let response = upsert_response(
            UpsertOutcome::Updated(course()),
            "/api/authors/a/courses/c".to_string(),
        );

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(LOCATION).is_none());
    }
}
