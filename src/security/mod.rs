//! Security subsystem: gates in front of the `/auth/*` routes.
//!
//! # Data Flow
//! ```text
//! /auth/basic/* → basic_auth.rs (Authorization: Basic, constant-time compare)
//! /auth/jwt/*   → jwt.rs (Bearer header or `jwt` cookie, HS256)
//!     → pass: liveness handler
//!     → fail: 401
//! ```

pub mod basic_auth;
pub mod jwt;

pub use basic_auth::basic_auth_middleware;
pub use jwt::{jwt_auth_middleware, JwtAuth};
