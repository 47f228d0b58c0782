pub mod author;
pub mod author_collection;
pub mod course;
pub mod key_binder;
pub mod pagination;
pub mod query_extractor;
pub mod query_params;
pub mod resource_uri;
pub mod server;
