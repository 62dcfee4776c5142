//! Delayed response.

use axum::{extract::Path, http::StatusCode, response::Response};
use std::collections::HashMap;
use std::time::Duration;

use crate::handlers::parse_param;
use crate::http::response::text;

/// Sleep for `seconds` (default 1) then answer `OK`. Negative values do not sleep.
pub async fn delayed_ok(seconds: Option<&str>) -> Response {
    let Some(seconds) = parse_param(seconds, 1) else {
        return text(StatusCode::BAD_REQUEST, "Invalid delay value");
    };

    let wait = Duration::from_secs(u64::try_from(seconds).unwrap_or(0));
    tokio::time::sleep(wait).await;

    text(StatusCode::OK, "OK")
}

pub async fn delay(Path(params): Path<HashMap<String, String>>) -> Response {
    delayed_ok(params.get("seconds").map(String::as_str)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delay_waits() {
        let start = Instant::now();
        let response = delayed_ok(Some("1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_invalid_delay() {
        let response = delayed_ok(Some("soon")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_delay_returns_immediately() {
        let start = Instant::now();
        let response = delayed_ok(Some("-5")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
