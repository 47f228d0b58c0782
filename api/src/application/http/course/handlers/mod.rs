pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod get_courses;
pub mod patch_course;
pub mod update_course;
