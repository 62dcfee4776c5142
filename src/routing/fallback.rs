//! Resolution of requests that matched no static route.

use axum::http::Method;

use crate::routing::RoutePrefix;

/// Policy for requests no static route claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    /// Every unmatched path under the prefix is inspected.
    InspectAll,
    /// Only `/inspect` and `/echo` inspect; everything else is 404.
    InspectRestricted,
}

/// What the fallback handler should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    Health,
    Inspect,
    NotFound,
}

/// Liveness answers any GET whose relative path begins with `health`.
pub fn is_health_path(relative: &str) -> bool {
    relative.starts_with("health")
}

/// Decide how to answer an unmatched request.
pub fn resolve(mode: FallbackMode, prefix: &RoutePrefix, method: &Method, path: &str) -> FallbackAction {
    let Some(relative) = prefix.strip(path) else {
        return FallbackAction::NotFound;
    };

    if *method == Method::GET && is_health_path(relative) {
        return FallbackAction::Health;
    }

    match mode {
        FallbackMode::InspectAll => FallbackAction::Inspect,
        FallbackMode::InspectRestricted => FallbackAction::NotFound,
    }
}
