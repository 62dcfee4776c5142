//! The static route table.
//!
//! # Responsibilities
//! - List every (method filter, path pattern) → endpoint pairing
//! - Stay independent of the HTTP framework; `http::server` turns the
//!   table into an axum router under the configured prefix
//!
//! # Design Decisions
//! - Built once at startup, never mutated
//! - Paths are relative to the route prefix
//! - Catch-all matching (`/health*`, inspect fallback) lives in
//!   `fallback.rs`, so static entries here always win

/// Which methods a route answers. Other methods get 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Methods {
    Get,
    Any,
}

/// Handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Info,
    Status,
    Word,
    Number,
    Uuid,
    Delay,
    BasicAuth,
    JwtAuth,
    Inspect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub methods: Methods,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

const fn entry(methods: Methods, path: &'static str, endpoint: Endpoint) -> RouteEntry {
    RouteEntry { methods, path, endpoint }
}

const ROUTES: &[RouteEntry] = &[
    entry(Methods::Get, "", Endpoint::Health),
    entry(Methods::Get, "health", Endpoint::Health),
    entry(Methods::Get, "info", Endpoint::Info),
    entry(Methods::Any, "status", Endpoint::Status),
    entry(Methods::Any, "status/{code}", Endpoint::Status),
    entry(Methods::Get, "word", Endpoint::Word),
    entry(Methods::Get, "word/{count}", Endpoint::Word),
    entry(Methods::Get, "number", Endpoint::Number),
    entry(Methods::Get, "number/{max}", Endpoint::Number),
    entry(Methods::Get, "uuid", Endpoint::Uuid),
    entry(Methods::Get, "uuid/{input}", Endpoint::Uuid),
    entry(Methods::Any, "delay", Endpoint::Delay),
    entry(Methods::Any, "delay/{seconds}", Endpoint::Delay),
    entry(Methods::Any, "auth/basic", Endpoint::BasicAuth),
    entry(Methods::Any, "auth/basic/", Endpoint::BasicAuth),
    entry(Methods::Any, "auth/basic/{*rest}", Endpoint::BasicAuth),
    entry(Methods::Any, "auth/jwt", Endpoint::JwtAuth),
    entry(Methods::Any, "auth/jwt/", Endpoint::JwtAuth),
    entry(Methods::Any, "auth/jwt/{*rest}", Endpoint::JwtAuth),
    entry(Methods::Any, "inspect", Endpoint::Inspect),
    entry(Methods::Any, "echo", Endpoint::Inspect),
];

/// All API routes, relative to the route prefix.
pub fn route_table() -> &'static [RouteEntry] {
    ROUTES
}
