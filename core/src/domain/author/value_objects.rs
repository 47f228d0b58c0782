use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    author::entities::Author,
    course::{entities::Course, value_objects::CreateCourseInput},
};

/// Filtering applied by the storage layer before ordering and paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateAuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub main_category: String,
    pub courses: Vec<CreateCourseInput>,
}

/// An author and its courses, persisted together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithCourses {
    pub author: Author,
    pub courses: Vec<Course>,
}

impl From<CreateAuthorInput> for AuthorWithCourses {
    fn from(input: CreateAuthorInput) -> Self {
        let author = Author::new(
            input.first_name,
            input.last_name,
            input.date_of_birth,
            input.date_of_death,
            input.main_category,
        );
        let courses = input
            .courses
            .into_iter()
            .map(|course| Course::new(author.id, course.title, course.description))
            .collect();

        Self { author, courses }
    }
}

pub struct GetAuthorInput {
    pub author_id: Uuid,
}

pub struct DeleteAuthorInput {
    pub author_id: Uuid,
}
