//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the toolkit.
//! All types derive Serde traits so a TOML file can supply any subset of
//! fields; everything else falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::routing::{FallbackMode, RoutePrefix};

/// Root configuration for the toolkit server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Listener configuration (port, TLS).
    pub listener: ListenerConfig,

    /// Request debugging / inspection settings.
    pub debug: DebugConfig,

    /// Route mounting settings.
    pub routing: RoutingConfig,

    /// Credentials for the gated routes.
    pub auth: AuthConfig,

    /// Static file / SPA serving.
    pub content: ContentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on, bound on all interfaces.
    pub port: u16,

    /// Directory holding `cert.pem` and `key.pem`.
    pub cert_path: Option<PathBuf>,

    /// Resolved at validation time; true only when both PEM files exist.
    #[serde(skip)]
    pub use_tls: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cert_path: None,
            use_tls: false,
        }
    }
}

impl ListenerConfig {
    /// Bind address on all interfaces.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Request debugging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log a snapshot of every request.
    pub request_debug: bool,

    /// Include the request body in snapshots.
    pub body_debug: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            request_debug: true,
            body_debug: true,
        }
    }
}

/// Route mounting settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prefix applied to every route.
    pub route_prefix: RoutePrefix,

    /// Send unmatched paths to the inspector.
    pub inspect_fallback: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            route_prefix: RoutePrefix::default(),
            inspect_fallback: true,
        }
    }
}

impl RoutingConfig {
    pub fn fallback_mode(&self) -> FallbackMode {
        if self.inspect_fallback {
            FallbackMode::InspectAll
        } else {
            FallbackMode::InspectRestricted
        }
    }
}

/// Credentials for `/auth/basic` and `/auth/jwt`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub basic_auth_user: String,
    pub basic_auth_password: String,

    /// HS256 signing key for bearer tokens.
    pub jwt_sign_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            basic_auth_user: "admin".to_string(),
            basic_auth_password: "secret".to_string(),
            jwt_sign_key: "key_1234567890".to_string(),
        }
    }
}

/// Static content serving. When either path is set the API routes are not mounted.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Serve files from this directory like a plain web server.
    pub static_path: Option<PathBuf>,

    /// Serve a single page app, falling back to `index.html`.
    pub spa_path: Option<PathBuf>,
}

/// Content serving mode resolved from [`ContentConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMode<'a> {
    Api,
    Static(&'a PathBuf),
    Spa(&'a PathBuf),
}

impl ContentConfig {
    /// Static serving takes precedence over SPA serving.
    pub fn mode(&self) -> ContentMode<'_> {
        match (&self.static_path, &self.spa_path) {
            (Some(dir), _) => ContentMode::Static(dir),
            (None, Some(dir)) => ContentMode::Spa(dir),
            (None, None) => ContentMode::Api,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for a request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prometheus exporter bind address; disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}
