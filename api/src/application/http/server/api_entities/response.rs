use axum::{
    Json,
    http::{HeaderName, StatusCode, header::LOCATION},
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    NoContent,
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
            Response::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// A response carrying one extra header, e.g. `Location` or `X-Pagination`.
pub type WithHeader<T> = ([(HeaderName, String); 1], Response<T>);

pub fn created_at<T: Serialize>(location: String, data: T) -> WithHeader<T> {
    ([(LOCATION, location)], Response::Created(data))
}
