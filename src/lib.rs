//! HTTP toolkit library.
//!
//! A small HTTP server for debugging clients, proxies and load balancers:
//! it echoes requests back as JSON, synthesizes status codes, delays and
//! random data, gates a pair of routes behind basic and bearer auth, and
//! can serve a static directory or a single page app instead.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;
pub mod words;

pub use config::schema::ToolkitConfig;
pub use error::ToolkitError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
