//! Endpoint handlers.
//!
//! Each handler is a thin axum adapter over a plain function of its path
//! parameter, so the behavior can be tested without a router.

pub mod delay;
pub mod health;
pub mod info;
pub mod inspect;
pub mod random;
pub mod status;

/// Parse an optional integer path parameter, using `default` when absent.
pub(crate) fn parse_param(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw {
        None | Some("") => Some(default),
        Some(value) => value.parse().ok(),
    }
}
