use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for both fixture servers
#[derive(OpenApi)]
#[openapi(
    info(
        title = "http-fixtures",
        version = "0.1.0",
        description = "Fixed-response HTTP servers for exercising client behavior"
    ),
    paths(
        handlers::status::index_handler,
        handlers::status::found_handler,
        handlers::status::unauthorized_handler,
        handlers::status::forbidden_handler,
        handlers::status::too_many_requests_handler,
        handlers::chunked::chunked_handler
    ),
    tags(
        (name = "status", description = "Status-code fixture server"),
        (name = "chunked", description = "Chunked-response fixture server")
    )
)]
pub struct ApiDoc;
