use uuid::Uuid;

use super::entities::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: Option<String>,
}

pub struct GetCoursesInput {
    pub author_id: Uuid,
    pub order_by: Option<String>,
}

pub struct GetCourseInput {
    pub author_id: Uuid,
    pub course_id: Uuid,
}

/// Full replacement of a course; creates it under `course_id` when absent.
pub struct UpsertCourseInput {
    pub author_id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

pub struct DeleteCourseInput {
    pub author_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Course),
    Updated(Course),
}
