use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryError {
    #[error("Invalid sort expression for '{field}': {reason}")]
    InvalidSortExpression { field: String, reason: String },

    #[error("No property mapping registered for {source_type} -> {destination_type}")]
    MappingNotFound {
        source_type: String,
        destination_type: String,
    },
}

impl QueryError {
    pub fn invalid_sort(field: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::InvalidSortExpression {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
