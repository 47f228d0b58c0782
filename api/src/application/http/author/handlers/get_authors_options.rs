use axum::http::{StatusCode, header::ALLOW};

#[utoipa::path(
    options,
    path = "",
    tag = "author",
    summary = "Author collection options",
    responses(
        (status = 200, headers(("Allow" = String, description = "Supported methods")))
    ),
)]
pub async fn get_authors_options() -> ([(axum::http::HeaderName, &'static str); 1], StatusCode) {
    ([(ALLOW, "GET,OPTIONS,POST")], StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_options_advertises_allowed_methods() {
        let response = get_authors_options().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(ALLOW).unwrap(), "GET,OPTIONS,POST");
    }
}
