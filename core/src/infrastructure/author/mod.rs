pub mod mappers;
pub mod repositories;

pub use repositories::author_repository::PostgresAuthorRepository;
