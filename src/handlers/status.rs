use crate::routes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// GET / handler - Plain-text index page
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Index page", body = String, content_type = "text/plain")
    ),
    tag = "status"
)]
pub async fn index_handler() -> &'static str {
    "Index page"
}

/// GET /302.html handler - Redirects to the index page
///
/// `Redirect::to` answers 303, so the 302 is built by hand.
#[utoipa::path(
    get,
    path = routes::FOUND,
    responses(
        (status = 302, description = "Redirect to the index page",
            headers(("location" = String, description = "Always `/`")))
    ),
    tag = "status"
)]
pub async fn found_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, routes::INDEX)])
}

#[utoipa::path(
    get,
    path = routes::UNAUTHORIZED,
    responses((status = 401, description = "Always unauthorized")),
    tag = "status"
)]
pub async fn unauthorized_handler() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

#[utoipa::path(
    get,
    path = routes::FORBIDDEN,
    responses((status = 403, description = "Always forbidden")),
    tag = "status"
)]
pub async fn forbidden_handler() -> StatusCode {
    StatusCode::FORBIDDEN
}

#[utoipa::path(
    get,
    path = routes::TOO_MANY_REQUESTS,
    responses((status = 429, description = "Always rate limited")),
    tag = "status"
)]
pub async fn too_many_requests_handler() -> StatusCode {
    StatusCode::TOO_MANY_REQUESTS
}
