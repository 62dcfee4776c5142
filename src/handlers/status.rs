//! Status code echo.

use axum::{extract::Path, http::StatusCode, response::Response};
use std::collections::HashMap;

use crate::handlers::parse_param;
use crate::http::response::text;

/// Respond with status `code` (default 200) and its canonical reason phrase.
/// Anything that is not an integer HTTP status yields 400.
pub fn echo_status(code: Option<&str>) -> Response {
    let status = parse_param(code, 200)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::BAD_REQUEST);

    text(status, status.canonical_reason().unwrap_or_default())
}

pub async fn status_code(Path(params): Path<HashMap<String, String>>) -> Response {
    echo_status(params.get("code").map(String::as_str))
}
