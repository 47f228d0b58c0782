use thiserror::Error;

use crate::domain::query::errors::QueryError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Author not found")]
    AuthorNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Internal server error")]
    InternalServerError,
}
