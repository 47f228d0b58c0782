use super::handlers::create_course::{__path_create_course, create_course};
use super::handlers::delete_course::{__path_delete_course, delete_course};
use super::handlers::get_course::{__path_get_course, get_course};
use super::handlers::get_courses::{__path_get_courses, get_courses};
use super::handlers::patch_course::{__path_patch_course, patch_course};
use super::handlers::update_course::{__path_update_course, update_course};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_courses,
    get_course,
    create_course,
    update_course,
    patch_course,
    delete_course
))]
pub struct CourseApiDoc;

pub fn course_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &state.route("/api/authors/{author_id}/courses"),
            get(get_courses).post(create_course),
        )
        .route(
            &state.route("/api/authors/{author_id}/courses/{course_id}"),
            get(get_course)
                .put(update_course)
                .patch(patch_course)
                .delete(delete_course),
        )
}
