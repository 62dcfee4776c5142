//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/ (metrics, request debug snapshot)
//!     → routed handler, or the fallback (health glob / inspect / 404)
//!     → response.rs (plain text / indented JSON)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::RequestSnapshot;
pub use server::{AppState, HttpServer};
