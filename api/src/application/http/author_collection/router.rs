use super::handlers::create_author_collection::{
    __path_create_author_collection, create_author_collection,
};
use super::handlers::get_author_collection::{
    __path_get_author_collection, get_author_collection,
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_author_collection, create_author_collection))]
pub struct AuthorCollectionApiDoc;

pub fn author_collection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &state.route("/api/authorcollections"),
            post(create_author_collection),
        )
        .route(
            &state.route("/api/authorcollections/{ids}"),
            get(get_author_collection),
        )
}
