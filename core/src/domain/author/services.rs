use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    author::{
        entities::{Author, AuthorDto},
        ports::{AuthorRepository, AuthorService},
        value_objects::{
            AuthorFilter, AuthorWithCourses, CreateAuthorInput, DeleteAuthorInput, GetAuthorInput,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    course::ports::CourseRepository,
    query::{
        ordering::apply_sort, paged_list::PagedList,
        resource_parameters::ResourceQueryParameters, sort::parse_sort_expression,
    },
};

impl<A, C> AuthorService for Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    #[instrument(
        skip(self, params),
        fields(order_by = %params.order_by, page_number = params.page_number, page_size = params.page_size)
    )]
    async fn get_authors(
        &self,
        params: ResourceQueryParameters,
    ) -> Result<PagedList<Author>, CoreError> {
        let mapping = self.property_mappings.get::<AuthorDto, Author>()?;
        let terms = parse_sort_expression(&params.order_by, mapping)?;

        let authors = self
            .author_repository
            .fetch_authors(AuthorFilter {
                main_category: params.main_category,
                search_query: params.search_query,
            })
            .await?;

        let authors = apply_sort(authors, &terms);

        Ok(PagedList::create(
            authors,
            params.page_number,
            params.page_size,
        ))
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    async fn get_author(&self, input: GetAuthorInput) -> Result<Author, CoreError> {
        self.author_repository
            .get_author_by_id(input.author_id)
            .await?
            .ok_or(CoreError::AuthorNotFound)
    }

    #[instrument(skip(self))]
    async fn get_authors_by_ids(&self, author_ids: Vec<Uuid>) -> Result<Vec<Author>, CoreError> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.author_repository.get_authors_by_ids(author_ids).await
    }

    #[instrument(skip(self, input), fields(main_category = %input.main_category))]
    async fn create_author(&self, input: CreateAuthorInput) -> Result<Author, CoreError> {
        self.author_repository
            .create_authors_with_courses(vec![input.into()])
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::InternalServerError)
    }

    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    async fn create_authors(
        &self,
        inputs: Vec<CreateAuthorInput>,
    ) -> Result<Vec<Author>, CoreError> {
        let authors = inputs.into_iter().map(AuthorWithCourses::from).collect();

        self.author_repository
            .create_authors_with_courses(authors)
            .await
    }

    #[instrument(skip(self, input), fields(author_id = %input.author_id))]
    async fn delete_author(&self, input: DeleteAuthorInput) -> Result<(), CoreError> {
        if !self.author_repository.author_exists(input.author_id).await? {
            return Err(CoreError::AuthorNotFound);
        }

        self.author_repository.delete_author(input.author_id).await
    }
}
