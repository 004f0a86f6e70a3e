use crate::handlers;
use crate::routes;
use crate::telemetry::http_trace_layer;
use axum::{routing::get, Router};

/// Router for the status-code fixture server.
pub fn status_router() -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::FOUND, get(handlers::found_handler))
        .route(routes::UNAUTHORIZED, get(handlers::unauthorized_handler))
        .route(routes::FORBIDDEN, get(handlers::forbidden_handler))
        .route(routes::TOO_MANY_REQUESTS, get(handlers::too_many_requests_handler))
        .layer(http_trace_layer())
}

/// Router for the chunked-response fixture server.
pub fn chunked_router() -> Router {
    Router::new()
        .route(routes::CHUNKED, get(handlers::chunked_handler))
        .layer(http_trace_layer())
}
