use chrono::NaiveDate;
use course_library_core::domain::author::value_objects::CreateAuthorInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::course::validators::CreateCourseValidator;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorValidator {
    #[validate(length(min = 1, max = 50, message = "firstName is required (max 50 characters)"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "lastName is required (max 50 characters)"))]
    pub last_name: String,

    pub date_of_birth: NaiveDate,

    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,

    #[validate(length(min = 1, max = 50, message = "mainCategory is required (max 50 characters)"))]
    pub main_category: String,

    #[serde(default)]
    #[validate(nested)]
    pub courses: Vec<CreateCourseValidator>,
}

impl From<CreateAuthorValidator> for CreateAuthorInput {
    fn from(payload: CreateAuthorValidator) -> Self {
        CreateAuthorInput {
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            date_of_death: payload.date_of_death,
            main_category: payload.main_category,
            courses: payload.courses.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> CreateAuthorValidator {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_author_with_courses() {
        let author = payload(
            r#"{
                "firstName": "Anne",
                "lastName": "Bonny",
                "dateOfBirth": "1697-03-08",
                "mainCategory": "Piracy",
                "courses": [{ "title": "Boarding", "description": "Hands on" }]
            }"#,
        );
        assert!(author.validate().is_ok());
        assert_eq!(CreateAuthorInput::from(author).courses.len(), 1);
    }

    #[test]
    fn test_missing_first_name_is_invalid() {
        let author = payload(
            r#"{ "firstName": "", "lastName": "Bonny", "dateOfBirth": "1697-03-08", "mainCategory": "Piracy" }"#,
        );
        assert!(author.validate().is_err());
    }

    #[test]
    fn test_nested_course_rules_apply() {
        let author = payload(
            r#"{
                "firstName": "Anne",
                "lastName": "Bonny",
                "dateOfBirth": "1697-03-08",
                "mainCategory": "Piracy",
                "courses": [{ "title": "Same", "description": "Same" }]
            }"#,
        );
        assert!(author.validate().is_err());
    }
}
