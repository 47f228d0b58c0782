use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response as AxumResponse,
};
use course_library_core::domain::{
    common::entities::app_errors::CoreError,
    course::{
        entities::CourseDto,
        ports::CourseService,
        value_objects::{GetCourseInput, UpsertCourseInput},
    },
};
use json_patch::Patch;
use uuid::Uuid;

use super::update_course::{course_location, upsert_response};
use crate::application::http::course::validators::{
    JsonPatchOperation, UpdateCourseValidator, apply_course_patch,
};
use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    patch,
    path = "/{author_id}/courses/{course_id}",
    tag = "course",
    summary = "Partially update course",
    description = "Applies a JSON Patch (RFC 6902) document to the course. When the course does not exist the patch is applied to an empty course, which is created if the result is valid.",
    params(
        ("author_id" = Uuid, Path, description = "Author ID"),
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 201, body = CourseDto),
        (status = 204),
        (status = 400, description = "Body is not a JSON Patch document"),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Patch cannot be applied or the patched course is invalid")
    ),
    request_body(content = Vec<JsonPatchOperation>, content_type = "application/json-patch+json")
)]
pub async fn patch_course(
    Path((author_id, course_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    payload: Result<Json<Patch>, JsonRejection>,
) -> Result<AxumResponse, ApiError> {
    let Json(patch) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let existing = match state
        .service
        .get_course(GetCourseInput {
            author_id,
            course_id,
        })
        .await
    {
        Ok(course) => Some(course),
        Err(CoreError::CourseNotFound) => None,
        Err(e) => return Err(e.into()),
    };

    let base = existing
        .map(UpdateCourseValidator::from)
        .unwrap_or_default();
    let patched = apply_course_patch(base, &patch)?;

    let outcome = state
        .service
        .upsert_course(UpsertCourseInput {
            author_id,
            course_id,
            title: patched.title,
            description: Some(patched.description),
        })
        .await?;

    Ok(upsert_response(
        outcome,
        course_location(&state, author_id, course_id),
    ))
}
