//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (bind 0.0.0.0:<port>)
//!     → tls.rs (optional: cert.pem + key.pem → rustls)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is optional and decided once at startup
//! - Missing certificate files downgrade to plaintext instead of failing

pub mod listener;
pub mod tls;
