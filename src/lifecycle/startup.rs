//! Startup banner.

use crate::config::{ContentMode, ToolkitConfig};
use crate::routing::FallbackMode;
use crate::security::JwtAuth;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log what this instance is about to serve, including test credentials.
pub fn announce(config: &ToolkitConfig, jwt: &JwtAuth) {
    tracing::info!(version = VERSION, "HTTP toolkit starting");

    match config.content.mode() {
        ContentMode::Static(dir) => {
            tracing::info!(path = %dir.display(), "Static file mode, API routes disabled");
            return;
        }
        ContentMode::Spa(dir) => {
            tracing::info!(path = %dir.display(), "SPA mode, API routes disabled");
            return;
        }
        ContentMode::Api => {}
    }

    let routing = &config.routing;
    tracing::info!(prefix = %routing.route_prefix, "Routes mounted");
    match routing.fallback_mode() {
        FallbackMode::InspectAll => tracing::info!("Unmatched paths are inspected"),
        FallbackMode::InspectRestricted => {
            tracing::info!("Inspection only on /inspect and /echo, other paths return 404")
        }
    }

    if config.debug.request_debug {
        tracing::info!(body = config.debug.body_debug, "Request debugging enabled");
    }

    tracing::info!(
        user = %config.auth.basic_auth_user,
        password = %config.auth.basic_auth_password,
        "Basic auth credentials"
    );
    match jwt.example_token() {
        Ok(token) => tracing::info!(token = %token, "Example JWT for /auth/jwt"),
        Err(e) => tracing::warn!(error = %e, "Could not sign example JWT"),
    }

    if config.listener.use_tls {
        tracing::info!("TLS enabled");
    }
}
