use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    course::{
        entities::Course,
        value_objects::{
            CreateCourseInput, DeleteCourseInput, GetCourseInput, GetCoursesInput,
            UpsertCourseInput, UpsertOutcome,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CourseService: Send + Sync {
    fn get_courses(
        &self,
        input: GetCoursesInput,
    ) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    /// Fails with `AuthorNotFound` or `CourseNotFound`.
    fn get_course(
        &self,
        input: GetCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn create_course(
        &self,
        author_id: Uuid,
        input: CreateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn upsert_course(
        &self,
        input: UpsertCourseInput,
    ) -> impl Future<Output = Result<UpsertOutcome, CoreError>> + Send;

    fn delete_course(
        &self,
        input: DeleteCourseInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn fetch_courses_by_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Course>, CoreError>> + Send;

    fn get_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn create_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn update_course(
        &self,
        course: Course,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
