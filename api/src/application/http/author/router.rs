use super::handlers::create_author::{__path_create_author, create_author};
use super::handlers::delete_author::{__path_delete_author, delete_author};
use super::handlers::get_author::{__path_get_author, get_author};
use super::handlers::get_authors::{__path_get_authors, get_authors};
use super::handlers::get_authors_options::{__path_get_authors_options, get_authors_options};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_authors, get_authors_options, get_author, create_author, delete_author))]
pub struct AuthorApiDoc;

pub fn author_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &state.route("/api/authors"),
            get(get_authors)
                .post(create_author)
                .options(get_authors_options),
        )
        .route(
            &state.route("/api/authors/{author_id}"),
            get(get_author).delete(delete_author),
        )
}
