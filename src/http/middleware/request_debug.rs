//! Request debug logging.
//! Logs a snapshot of every request before it reaches the router.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::RequestSnapshot;
use crate::http::server::AppState;

pub async fn request_debug_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let captured = RequestSnapshot::capture(
        request,
        state.config.debug.body_debug,
        state.config.limits.max_body_size,
    )
    .await;

    let (snapshot, request) = match captured {
        Ok(captured) => captured,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting request");
            return e.into_response();
        }
    };

    match snapshot.to_pretty_json() {
        Ok(json) => tracing::info!("Request details: {}", json),
        Err(e) => tracing::error!(error = %e, "Failed to serialize request details"),
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolkitConfig;
    use axum::{
        body::to_bytes,
        http::{header, StatusCode},
        middleware,
        routing::post,
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;
    use tower_http::limit::RequestBodyLimitLayer;
    use tracing_test::traced_test;

    async fn echo_body(body: String) -> String {
        body
    }

    fn app(config: ToolkitConfig) -> Router {
        let limit = config.limits.max_body_size;
        let state = AppState::new(Arc::new(config));
        Router::new()
            .route("/echo", post(echo_body))
            .layer(middleware::from_fn_with_state(state, request_debug_middleware))
            .layer(RequestBodyLimitLayer::new(limit))
    }

    #[tokio::test]
    #[traced_test]
    async fn test_logs_snapshot_and_forwards_body() {
        let request = Request::post("/echo?q=1")
            .header("x-test", "abc")
            .body(Body::from("payload"))
            .unwrap();

        let response = app(ToolkitConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"payload");

        assert!(logs_contain("Request details:"));
    }

    #[tokio::test]
    async fn test_streamed_oversized_body_is_rejected() {
        let mut config = ToolkitConfig::default();
        config.limits.max_body_size = 16;

        // No Content-Length, so only reading the body reveals the size.
        let request = Request::post("/echo").body(Body::from("x".repeat(64))).unwrap();
        assert!(request.headers().get(header::CONTENT_LENGTH).is_none());

        let response = app(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_oversized_body_passes_through_without_body_debug() {
        let mut config = ToolkitConfig::default();
        config.limits.max_body_size = 16;
        config.debug.body_debug = false;

        let request = Request::post("/echo").body(Body::from("x".repeat(64))).unwrap();
        let response = app(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
