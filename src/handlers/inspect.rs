//! Request inspector: answers with the snapshot of the request itself.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
};

use crate::http::request::RequestSnapshot;
use crate::http::response::pretty_json;
use crate::http::server::AppState;

pub async fn inspect(State(state): State<AppState>, request: Request<Body>) -> Response {
    let captured = RequestSnapshot::capture(
        request,
        state.config.debug.body_debug,
        state.config.limits.max_body_size,
    )
    .await;

    match captured {
        Ok((snapshot, _)) => pretty_json(&snapshot),
        Err(e) => e.into_response(),
    }
}
