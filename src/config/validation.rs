//! Configuration validation.
//!
//! Runs once at startup, after all layers are merged. Hard errors are
//! collected and returned together; soft problems (missing TLS files,
//! conflicting content modes) are logged and corrected in place.

use thiserror::Error;

use crate::config::schema::ToolkitConfig;
use crate::net::tls::find_cert_files;

/// A semantic problem with the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("port must be non-zero")]
    ZeroPort,

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("max body size must be non-zero")]
    ZeroBodyLimit,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate and normalize the configuration.
pub fn validate_config(config: &mut ToolkitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    config.listener.use_tls = false;
    if let Some(dir) = &config.listener.cert_path {
        tracing::info!(cert_path = %dir.display(), "Enabling TLS, checking cert & key files");
        match find_cert_files(dir) {
            Ok(_) => config.listener.use_tls = true,
            Err(e) => tracing::warn!(error = %e, "TLS will be disabled"),
        }
    }

    if config.content.static_path.is_some() && config.content.spa_path.is_some() {
        tracing::warn!("Both static and SPA paths set, serving static files only");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let mut config = ToolkitConfig::default();
        assert!(validate_config(&mut config).is_ok());
        assert!(!config.listener.use_tls);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ToolkitConfig::default();
        config.listener.port = 0;
        config.timeouts.request_secs = 0;
        config.observability.log_level = "chatty".into();

        let errors = validate_config(&mut config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroPort,
                ValidationError::ZeroTimeout,
                ValidationError::UnknownLogLevel("chatty".into()),
            ]
        );
    }

    #[test]
    fn test_tls_disabled_when_key_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cert.pem"), "cert").unwrap();

        let mut config = ToolkitConfig::default();
        config.listener.cert_path = Some(dir.path().to_path_buf());
        validate_config(&mut config).unwrap();

        assert!(!config.listener.use_tls);
    }

    #[test]
    fn test_tls_enabled_when_both_files_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cert.pem"), "cert").unwrap();
        fs::write(dir.path().join("key.pem"), "key").unwrap();

        let mut config = ToolkitConfig::default();
        config.listener.cert_path = Some(dir.path().to_path_buf());
        validate_config(&mut config).unwrap();

        assert!(config.listener.use_tls);
    }
}
