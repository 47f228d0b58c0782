use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    course::{entities::Course, ports::CourseRepository},
};
use crate::entity::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as CourseEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CourseRepository for PostgresCourseRepository {
    async fn fetch_courses_by_author(&self, author_id: Uuid) -> Result<Vec<Course>, CoreError> {
        let courses = CourseEntity::find()
            .filter(CourseColumn::AuthorId.eq(author_id))
            .order_by_asc(CourseColumn::Title)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch courses by author: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Course::from)
            .collect::<Vec<Course>>();

        Ok(courses)
    }

    async fn get_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Course>, CoreError> {
        let course = CourseEntity::find()
            .filter(CourseColumn::Id.eq(course_id))
            .filter(CourseColumn::AuthorId.eq(author_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course: {}", e);
                CoreError::InternalServerError
            })?
            .map(Course::from);

        Ok(course)
    }

    async fn create_course(&self, course: Course) -> Result<Course, CoreError> {
        let created_course = CourseEntity::insert(CourseActiveModel {
            id: Set(course.id),
            title: Set(course.title),
            description: Set(course.description),
            author_id: Set(course.author_id),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Course::from)
        .map_err(|e| {
            error!("Failed to create course: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created_course)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CoreError> {
        let updated_course = CourseEntity::update(CourseActiveModel {
            id: Set(course.id),
            title: Set(course.title),
            description: Set(course.description),
            author_id: Set(course.author_id),
        })
        .filter(CourseColumn::Id.eq(course.id))
        .filter(CourseColumn::AuthorId.eq(course.author_id))
        .exec(&self.db)
        .await
        .map(Course::from)
        .map_err(|e| {
            error!("Failed to update course: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated_course)
    }

    async fn delete_course(&self, author_id: Uuid, course_id: Uuid) -> Result<(), CoreError> {
        let result = CourseEntity::delete_many()
            .filter(CourseColumn::Id.eq(course_id))
            .filter(CourseColumn::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete course: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::CourseNotFound);
        }

        Ok(())
    }
}
