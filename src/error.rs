//! Crate-level error type for startup and serving.

use thiserror::Error;

use crate::config::ConfigError;
use crate::net::listener::ListenerError;
use crate::net::tls::TlsError;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Tls(#[from] TlsError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
