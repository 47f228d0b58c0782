pub mod author;
pub mod course;
pub mod db;
