use tracing::info;

use crate::{
    domain::{
        author::entities::{Author, AuthorDto, author_property_mapping},
        common::{CourseLibraryConfig, entities::app_errors::CoreError, services::Service},
        course::entities::{Course, CourseDto, course_property_mapping},
        query::property_mapping::PropertyMappingService,
    },
    infrastructure::{
        author::PostgresAuthorRepository,
        course::PostgresCourseRepository,
        db::postgres::{Postgres, PostgresConfig},
    },
};

pub type CourseLibraryService = Service<PostgresAuthorRepository, PostgresCourseRepository>;

/// Every DTO to entity translation table known to the service.
pub fn property_mappings() -> PropertyMappingService {
    PropertyMappingService::new()
        .register::<AuthorDto, Author>(author_property_mapping())
        .register::<CourseDto, Course>(course_property_mapping())
}

pub async fn create_service(config: CourseLibraryConfig) -> Result<CourseLibraryService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await
    .map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        CoreError::InternalServerError
    })?;

    info!(
        host = %config.database.host,
        name = %config.database.name,
        "connected to database"
    );

    Ok(Service::new(
        PostgresAuthorRepository::new(postgres.get_db()),
        PostgresCourseRepository::new(postgres.get_db()),
        property_mappings(),
    ))
}
