use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    author::ports::AuthorRepository,
    common::{entities::app_errors::CoreError, services::Service},
    course::{
        entities::{Course, CourseDto},
        ports::{CourseRepository, CourseService},
        value_objects::{
            CreateCourseInput, DeleteCourseInput, GetCourseInput, GetCoursesInput,
            UpsertCourseInput, UpsertOutcome,
        },
    },
    query::{ordering::apply_sort, sort::parse_sort_expression},
};

impl<A, C> Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    async fn ensure_author_exists(&self, author_id: Uuid) -> Result<(), CoreError> {
        if self.author_repository.author_exists(author_id).await? {
            Ok(())
        } else {
            Err(CoreError::AuthorNotFound)
        }
    }
}

impl<A, C> CourseService for Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    async fn get_courses(&self, input: GetCoursesInput) -> Result<Vec<Course>, CoreError> {
        let mapping = self.property_mappings.get::<CourseDto, Course>()?;
        let terms = parse_sort_expression(input.order_by.as_deref().unwrap_or(""), mapping)?;

        self.ensure_author_exists(input.author_id).await?;

        let courses = self
            .course_repository
            .fetch_courses_by_author(input.author_id)
            .await?;

        Ok(apply_sort(courses, &terms))
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id, course_id = %input.course_id))]
    async fn get_course(&self, input: GetCourseInput) -> Result<Course, CoreError> {
        self.ensure_author_exists(input.author_id).await?;

        self.course_repository
            .get_course(input.author_id, input.course_id)
            .await?
            .ok_or(CoreError::CourseNotFound)
    }

    #[instrument(skip(self, input))]
    async fn create_course(
        &self,
        author_id: Uuid,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        self.ensure_author_exists(author_id).await?;

        let course = Course::new(author_id, input.title, input.description);
        self.course_repository.create_course(course).await
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id, course_id = %input.course_id))]
    async fn upsert_course(&self, input: UpsertCourseInput) -> Result<UpsertOutcome, CoreError> {
        self.ensure_author_exists(input.author_id).await?;

        let existing = self
            .course_repository
            .get_course(input.author_id, input.course_id)
            .await?;

        match existing {
            Some(mut course) => {
                course.update(input.title, input.description);
                let updated = self.course_repository.update_course(course).await?;
                Ok(UpsertOutcome::Updated(updated))
            }
            None => {
                let course = Course::with_id(
                    input.course_id,
                    input.author_id,
                    input.title,
                    input.description,
                );
                let created = self.course_repository.create_course(course).await?;
                Ok(UpsertOutcome::Created(created))
            }
        }
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id, course_id = %input.course_id))]
    async fn delete_course(&self, input: DeleteCourseInput) -> Result<(), CoreError> {
        self.ensure_author_exists(input.author_id).await?;

        if self
            .course_repository
            .get_course(input.author_id, input.course_id)
            .await?
            .is_none()
        {
            return Err(CoreError::CourseNotFound);
        }

        self.course_repository
            .delete_course(input.author_id, input.course_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::property_mappings,
        domain::{author::ports::MockAuthorRepository, course::ports::MockCourseRepository},
    };

    fn existing_author() -> MockAuthorRepository {
        let mut repository = MockAuthorRepository::new();
        repository
            .expect_author_exists()
            .returning(|_| Box::pin(async { Ok(true) }));
        repository
    }

    fn service(
        authors: MockAuthorRepository,
        courses: MockCourseRepository,
    ) -> Service<MockAuthorRepository, MockCourseRepository> {
        Service::new(authors, courses, property_mappings())
    }

    #[tokio::test]
    async fn test_get_courses_defaults_to_title_order() {
        let author_id = Uuid::new_v4();
        let stored = vec![
            Course::new(author_id, "Parrots".to_string(), None),
            Course::new(author_id, "Anchors".to_string(), None),
            Course::new(author_id, "Maps".to_string(), None),
        ];

        let mut courses = MockCourseRepository::new();
        courses
            .expect_fetch_courses_by_author()
            .times(1)
            .returning(move |_| {
                let stored = stored.clone();
                Box::pin(async move { Ok(stored) })
            });

        let result = service(existing_author(), courses)
            .get_courses(GetCoursesInput {
                author_id,
                order_by: None,
            })
            .await
            .unwrap();

        let titles: Vec<&str> = result.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Anchors", "Maps", "Parrots"]);
    }

    #[tokio::test]
    async fn test_get_courses_rejects_unknown_sort_field() {
        let err = service(MockAuthorRepository::new(), MockCourseRepository::new())
            .get_courses(GetCoursesInput {
                author_id: Uuid::new_v4(),
                order_by: Some("-duration".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Query(_)));
    }

    #[tokio::test]
    async fn test_get_course_for_unknown_author() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_author_exists()
            .returning(|_| Box::pin(async { Ok(false) }));

        let err = service(authors, MockCourseRepository::new())
            .get_course(GetCourseInput {
                author_id: Uuid::new_v4(),
                course_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::AuthorNotFound);
    }

    #[tokio::test]
    async fn test_upsert_creates_with_given_id() {
        let author_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();

        let mut courses = MockCourseRepository::new();
        courses
            .expect_get_course()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        courses
            .expect_create_course()
            .times(1)
            .returning(|course| Box::pin(async move { Ok(course) }));

        let outcome = service(existing_author(), courses)
            .upsert_course(UpsertCourseInput {
                author_id,
                course_id,
                title: "Sailing".to_string(),
                description: None,
            })
            .await
            .unwrap();

        match outcome {
            UpsertOutcome::Created(course) => {
                assert_eq!(course.id, course_id);
                assert_eq!(course.author_id, author_id);
            }
            other => panic!("expected a created course, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_course() {
        let author_id = Uuid::new_v4();
        let existing = Course::new(author_id, "Old".to_string(), None);
        let course_id = existing.id;

        let mut courses = MockCourseRepository::new();
        courses.expect_get_course().returning(move |_, _| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        courses
            .expect_update_course()
            .times(1)
            .returning(|course| Box::pin(async move { Ok(course) }));

        let outcome = service(existing_author(), courses)
            .upsert_course(UpsertCourseInput {
                author_id,
                course_id,
                title: "New".to_string(),
                description: Some("Updated".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            UpsertOutcome::Updated(Course::with_id(
                course_id,
                author_id,
                "New".to_string(),
                Some("Updated".to_string()),
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_missing_course() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_get_course()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let err = service(existing_author(), courses)
            .delete_course(DeleteCourseInput {
                author_id: Uuid::new_v4(),
                course_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::CourseNotFound);
    }
}
