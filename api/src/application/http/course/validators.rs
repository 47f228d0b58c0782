use std::borrow::Cow;

use course_library_core::domain::course::{entities::Course, value_objects::CreateCourseInput};
use json_patch::Patch;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

fn title_differs_from_description(
    title: &str,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    if description == Some(title) {
        let mut error = ValidationError::new("description_equals_title");
        error.message = Some(Cow::from(
            "The provided description should be different from the title.",
        ));
        return Err(error);
    }
    Ok(())
}

fn validate_create_course(course: &CreateCourseValidator) -> Result<(), ValidationError> {
    title_differs_from_description(&course.title, course.description.as_deref())
}

fn validate_update_course(course: &UpdateCourseValidator) -> Result<(), ValidationError> {
    title_differs_from_description(&course.title, Some(&course.description))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_course"))]
pub struct CreateCourseValidator {
    #[validate(length(min = 1, max = 100, message = "title is required (max 100 characters)"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 1500, message = "description must be at most 1500 characters"))]
    pub description: Option<String>,
}

impl From<CreateCourseValidator> for CreateCourseInput {
    fn from(payload: CreateCourseValidator) -> Self {
        CreateCourseInput {
            title: payload.title,
            description: payload.description,
        }
    }
}

/// Full replacement payload for PUT; unlike creation the description is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_course"))]
pub struct UpdateCourseValidator {
    #[validate(length(min = 1, max = 100, message = "title is required (max 100 characters)"))]
    pub title: String,

    #[validate(length(min = 1, max = 1500, message = "description is required (max 1500 characters)"))]
    pub description: String,
}

impl From<Course> for UpdateCourseValidator {
    fn from(course: Course) -> Self {
        UpdateCourseValidator {
            title: course.title,
            description: course.description.unwrap_or_default(),
        }
    }
}

/// One RFC 6902 operation, e.g. `{ "op": "replace", "path": "/title", "value": "Knots" }`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct JsonPatchOperation {
    pub op: String,
    pub path: String,
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
}

/// Applies `patch` to `course` and checks the result against the PUT rules.
///
/// Operations that cannot be applied and results that are not a valid course both
/// fail with a validation error.
pub fn apply_course_patch(
    course: UpdateCourseValidator,
    patch: &Patch,
) -> Result<UpdateCourseValidator, ApiError> {
    let mut document = serde_json::to_value(course)
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    json_patch::patch(&mut document, &patch.0)
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let patched: UpdateCourseValidator = serde_json::from_value(document)
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;
    patched
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    Ok(patched)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CoursesQuery {
    /// Comma separated properties, prefix with `-` for descending (default: title)
    pub order_by: Option<String>,
}

impl CoursesQuery {
    pub fn from_query_string(query: &str) -> Result<Self, ApiError> {
        serde_urlencoded::from_str(query)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))
    }
}
