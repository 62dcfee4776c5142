//! Middleware wrapped around the route tree.

pub mod metrics;
pub mod request_debug;

pub use self::metrics::track_metrics;
pub use self::request_debug::request_debug_middleware;
