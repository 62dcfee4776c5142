//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment variables / flags (loader.rs, clap)
//!     → validation.rs (semantic checks, TLS downgrade)
//!     → ToolkitConfig (validated, immutable)
//!     → shared via Arc to handlers and middleware
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the server runs with no arguments
//! - Validation separates syntactic (serde/clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, resolve, Cli, ConfigError};
pub use schema::{
    AuthConfig, ContentConfig, ContentMode, DebugConfig, ListenerConfig, ToolkitConfig,
};
