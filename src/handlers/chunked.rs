use crate::routes;
use axum::body::{Body, Bytes};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::time::Duration;

pub const LINE_COUNT: usize = 10;

pub fn line(n: usize) -> String {
    format!("This is a line: {n}\n")
}

/// One frame per line. Between lines the stream yields, or sleeps for
/// `pause` when it is non-zero, so each frame is written before the next
/// is produced.
fn lines(pause: Duration) -> impl Stream<Item = Result<Bytes, Infallible>> {
    stream::unfold(0, move |n| async move {
        if n >= LINE_COUNT {
            return None;
        }
        if n > 0 {
            if pause.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(pause).await;
            }
        }
        Some((Ok::<_, Infallible>(Bytes::from(line(n))), n + 1))
    })
}

fn streamed_lines(pause: Duration) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        Body::from_stream(lines(pause)),
    )
        .into_response()
}

/// GET /chunked.html handler - Streams ten short lines
///
/// No Content-Length is set, so HTTP/1.1 clients receive the body with
/// chunked transfer encoding. If the client goes away mid-stream hyper
/// drops the stream and the request simply ends.
#[utoipa::path(
    get,
    path = routes::CHUNKED,
    responses(
        (status = 200, description = "Ten lines streamed one chunk at a time",
            body = String, content_type = "text/plain")
    ),
    tag = "chunked"
)]
pub async fn chunked_handler() -> Response {
    tracing::debug!("Streaming {} lines", LINE_COUNT);
    streamed_lines(Duration::ZERO)
}
