use crate::application::http::{
    author::router::AuthorApiDoc, author_collection::router::AuthorCollectionApiDoc,
    course::router::CourseApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Library API"
    ),
    nest(
        (path = "/api/authors", api = AuthorApiDoc),
        (path = "/api/authors", api = CourseApiDoc),
        (path = "/api/authorcollections", api = AuthorCollectionApiDoc),
    )
)]
pub struct ApiDoc;
