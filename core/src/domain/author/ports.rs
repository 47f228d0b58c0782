use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    author::{
        entities::Author,
        value_objects::{
            AuthorFilter, AuthorWithCourses, CreateAuthorInput, DeleteAuthorInput, GetAuthorInput,
        },
    },
    common::entities::app_errors::CoreError,
    query::{paged_list::PagedList, resource_parameters::ResourceQueryParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthorService: Send + Sync {
    /// Filters, orders and pages authors. The sort expression is checked before storage is hit.
    fn get_authors(
        &self,
        params: ResourceQueryParameters,
    ) -> impl Future<Output = Result<PagedList<Author>, CoreError>> + Send;

    fn get_author(
        &self,
        input: GetAuthorInput,
    ) -> impl Future<Output = Result<Author, CoreError>> + Send;

    /// Returns the authors found among `author_ids`; missing ids are left out.
    fn get_authors_by_ids(
        &self,
        author_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn create_author(
        &self,
        input: CreateAuthorInput,
    ) -> impl Future<Output = Result<Author, CoreError>> + Send;

    fn create_authors(
        &self,
        inputs: Vec<CreateAuthorInput>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn delete_author(
        &self,
        input: DeleteAuthorInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthorRepository: Send + Sync {
    fn fetch_authors(
        &self,
        filter: AuthorFilter,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn get_authors_by_ids(
        &self,
        author_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn get_author_by_id(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Option<Author>, CoreError>> + Send;

    fn author_exists(&self, author_id: Uuid)
    -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Inserts every author with its courses in one transaction.
    fn create_authors_with_courses(
        &self,
        authors: Vec<AuthorWithCourses>,
    ) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn delete_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
