use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    author::{
        entities::Author,
        ports::AuthorRepository,
        value_objects::{AuthorFilter, AuthorWithCourses},
    },
    common::entities::app_errors::CoreError,
};
use crate::entity::{
    authors::{ActiveModel as AuthorActiveModel, Column as AuthorColumn, Entity as AuthorEntity},
    courses::{ActiveModel as CourseActiveModel, Entity as CourseEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresAuthorRepository {
    pub db: DatabaseConnection,
}

impl PostgresAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AuthorRepository for PostgresAuthorRepository {
    async fn fetch_authors(&self, filter: AuthorFilter) -> Result<Vec<Author>, CoreError> {
        let mut query = AuthorEntity::find();

        if let Some(main_category) = filter.main_category {
            query = query.filter(AuthorColumn::MainCategory.eq(main_category));
        }

        if let Some(search_query) = filter.search_query {
            query = query.filter(search_condition(&search_query));
        }

        let authors = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch authors: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Author::from)
            .collect::<Vec<Author>>();

        Ok(authors)
    }

    async fn get_authors_by_ids(&self, author_ids: Vec<Uuid>) -> Result<Vec<Author>, CoreError> {
        let authors = AuthorEntity::find()
            .filter(AuthorColumn::Id.is_in(author_ids))
            .order_by_asc(AuthorColumn::FirstName)
            .order_by_asc(AuthorColumn::LastName)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch authors by ids: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Author::from)
            .collect::<Vec<Author>>();

        Ok(authors)
    }

    async fn get_author_by_id(&self, author_id: Uuid) -> Result<Option<Author>, CoreError> {
        let author = AuthorEntity::find_by_id(author_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get author by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Author::from);

        Ok(author)
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, CoreError> {
        let count = AuthorEntity::find()
            .filter(AuthorColumn::Id.eq(author_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to check author existence: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn create_authors_with_courses(
        &self,
        authors: Vec<AuthorWithCourses>,
    ) -> Result<Vec<Author>, CoreError> {
        let txn = self.db.begin().await.map_err(write_error)?;

        // an early return drops `txn`, which rolls every insert back
        let mut created_authors = Vec::with_capacity(authors.len());
        for AuthorWithCourses { author, courses } in authors {
            let created_author = AuthorEntity::insert(AuthorActiveModel {
                id: Set(author.id),
                first_name: Set(author.first_name),
                last_name: Set(author.last_name),
                date_of_birth: Set(author.date_of_birth),
                date_of_death: Set(author.date_of_death),
                main_category: Set(author.main_category),
            })
            .exec_with_returning(&txn)
            .await
            .map_err(write_error)?;

            for course in courses {
                CourseEntity::insert(CourseActiveModel {
                    id: Set(course.id),
                    title: Set(course.title),
                    description: Set(course.description),
                    author_id: Set(created_author.id),
                })
                .exec(&txn)
                .await
                .map_err(write_error)?;
            }

            created_authors.push(Author::from(created_author));
        }

        txn.commit().await.map_err(write_error)?;

        Ok(created_authors)
    }

    async fn delete_author(&self, author_id: Uuid) -> Result<(), CoreError> {
        let result = AuthorEntity::delete_by_id(author_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete author: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::AuthorNotFound);
        }

        Ok(())
    }
}

/// Case-insensitive substring match over main category, first and last name.
fn search_condition(search_query: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(search_query));

    Condition::any()
        .add(Expr::col(AuthorColumn::MainCategory).ilike(pattern.as_str()))
        .add(Expr::col(AuthorColumn::FirstName).ilike(pattern.as_str()))
        .add(Expr::col(AuthorColumn::LastName).ilike(pattern.as_str()))
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn write_error(e: DbErr) -> CoreError {
    error!("Failed to create authors: {}", e);
    CoreError::InternalServerError
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let sql = AuthorEntity::find()
            .filter(search_condition("rum"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("\"main_category\" ILIKE '%rum%'"));
        assert!(sql.contains("\"first_name\" ILIKE '%rum%'"));
        assert!(sql.contains("\"last_name\" ILIKE '%rum%'"));
        assert!(!sql.contains(" LIKE "));
    }

    #[test]
    fn test_search_escapes_wildcards() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }
}
