pub mod author;
pub mod common;
pub mod course;
pub mod query;
