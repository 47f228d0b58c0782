use std::sync::Arc;

use crate::domain::{
    author::ports::AuthorRepository, course::ports::CourseRepository,
    query::property_mapping::PropertyMappingService,
};

/// Application service shared by every request handler.
///
/// Repositories and the property mapping registry are immutable once the
/// service is built, so clones are cheap and safe to hand to concurrent requests.
pub struct Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    pub(crate) author_repository: Arc<A>,
    pub(crate) course_repository: Arc<C>,
    pub(crate) property_mappings: Arc<PropertyMappingService>,
}

impl<A, C> Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    pub fn new(
        author_repository: A,
        course_repository: C,
        property_mappings: PropertyMappingService,
    ) -> Self {
        Self {
            author_repository: Arc::new(author_repository),
            course_repository: Arc::new(course_repository),
            property_mappings: Arc::new(property_mappings),
        }
    }

    pub fn property_mappings(&self) -> &PropertyMappingService {
        &self.property_mappings
    }
}

impl<A, C> Clone for Service<A, C>
where
    A: AuthorRepository,
    C: CourseRepository,
{
    fn clone(&self) -> Self {
        Self {
            author_repository: Arc::clone(&self.author_repository),
            course_repository: Arc::clone(&self.course_repository),
            property_mappings: Arc::clone(&self.property_mappings),
        }
    }
}
