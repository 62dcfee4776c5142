//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     table.rs (relative routes)
//!     → prefix.rs (mount under normalized prefix)
//!     → http::server builds the axum Router
//!
//! Incoming request:
//!     axum matches a static route → handler
//!     no match → fallback.rs (health glob / inspect / 404)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Static routes always beat catch-all behavior
//! - Deterministic: same input always matches same route

pub mod fallback;
pub mod prefix;
pub mod table;

pub use fallback::{FallbackAction, FallbackMode};
pub use prefix::RoutePrefix;
pub use table::{route_table, Endpoint, Methods, RouteEntry};
