//! Configuration loading from flags, environment and an optional TOML file.

use clap::builder::BoolishValueParser;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::ToolkitConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::RoutePrefix;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command line interface. Every option can also come from the
/// equally named environment variable; an explicit flag wins.
#[derive(Debug, Default, Parser)]
#[command(name = "http-toolkit")]
#[command(version, about = "A simple HTTP toolkit for debugging and testing", long_about = None)]
pub struct Cli {
    /// TOML file providing base settings
    #[arg(long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Enable request debugging/inspection in logs
    #[arg(long, env = "REQUEST_DEBUG", num_args = 0..=1, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub request_debug: Option<bool>,

    /// Include request body when debugging
    #[arg(long, env = "BODY_DEBUG", num_args = 0..=1, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub body_debug: Option<bool>,

    /// Fallback to inspect & echo when no routes match
    #[arg(long, env = "INSPECT_FALLBACK", num_args = 0..=1, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    pub inspect_fallback: Option<bool>,

    /// Route prefix
    #[arg(long, env = "ROUTE_PREFIX")]
    pub route_prefix: Option<String>,

    /// Basic auth username
    #[arg(long, env = "BASIC_AUTH_USER")]
    pub basic_auth_user: Option<String>,

    /// Basic auth password
    #[arg(long, env = "BASIC_AUTH_PASSWORD")]
    pub basic_auth_password: Option<String>,

    /// Signing key for JWT
    #[arg(long, env = "JWT_SIGN_KEY")]
    pub jwt_sign_key: Option<String>,

    /// Path to directory with TLS cert.pem & key.pem files
    #[arg(long, env = "CERT_PATH")]
    pub cert_path: Option<PathBuf>,

    /// Path to static files to serve, default is none and don't serve files
    #[arg(long, env = "STATIC_PATH")]
    pub static_path: Option<PathBuf>,

    /// Path to SPA files to serve, default is none and don't serve SPA
    #[arg(long, env = "SPA_PATH")]
    pub spa_path: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    /// Maximum request body size in bytes
    #[arg(long, env = "MAX_BODY_SIZE")]
    pub max_body_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Address for the Prometheus metrics exporter, disabled when unset
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl Cli {
    /// Overlay every option that was supplied onto `config`.
    pub fn apply(&self, config: &mut ToolkitConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(path) = &self.cert_path {
            config.listener.cert_path = Some(path.clone());
        }
        if let Some(enabled) = self.request_debug {
            config.debug.request_debug = enabled;
        }
        if let Some(enabled) = self.body_debug {
            config.debug.body_debug = enabled;
        }
        if let Some(enabled) = self.inspect_fallback {
            config.routing.inspect_fallback = enabled;
        }
        if let Some(prefix) = self.route_prefix.as_deref().filter(|p| !p.is_empty()) {
            config.routing.route_prefix = RoutePrefix::new(prefix);
        }
        if let Some(user) = self.basic_auth_user.as_deref().filter(|u| !u.is_empty()) {
            config.auth.basic_auth_user = user.to_string();
        }
        if let Some(password) = self.basic_auth_password.as_deref().filter(|p| !p.is_empty()) {
            config.auth.basic_auth_password = password.to_string();
        }
        if let Some(key) = self.jwt_sign_key.as_deref().filter(|k| !k.is_empty()) {
            config.auth.jwt_sign_key = key.to_string();
        }
        if let Some(path) = &self.static_path {
            config.content.static_path = Some(path.clone());
        }
        if let Some(path) = &self.spa_path {
            config.content.spa_path = Some(path.clone());
        }
        if let Some(secs) = self.request_timeout {
            config.timeouts.request_secs = secs;
        }
        if let Some(size) = self.max_body_size {
            config.limits.max_body_size = size;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(addr) = &self.metrics_address {
            config.observability.metrics_address = Some(addr.clone());
        }
    }
}

/// Load a TOML configuration file. Missing sections fall back to defaults.
pub fn load_config_file(path: &Path) -> Result<ToolkitConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Merge defaults, the optional file, then flags and environment.
/// The result is not validated yet.
pub fn resolve(cli: &Cli) -> Result<ToolkitConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => ToolkitConfig::default(),
    };

    cli.apply(&mut config);
    Ok(config)
}

/// Build the effective, validated configuration.
pub fn load(cli: &Cli) -> Result<ToolkitConfig, ConfigError> {
    let mut config = resolve(cli)?;
    validate_config(&mut config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["http-toolkit"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--port",
            "9001",
            "--request-debug=false",
            "--body-debug",
            "0",
            "--route-prefix",
            "api",
            "--basic-auth-user",
            "bob",
        ]);
        let mut config = ToolkitConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.listener.port, 9001);
        assert!(!config.debug.request_debug);
        assert!(!config.debug.body_debug);
        assert_eq!(config.routing.route_prefix.as_str(), "/api/");
        assert_eq!(config.auth.basic_auth_user, "bob");
        assert_eq!(config.auth.basic_auth_password, "secret");
    }

    #[test]
    fn test_bare_boolean_flag_means_true() {
        let cli = parse(&["--inspect-fallback"]);
        assert_eq!(cli.inspect_fallback, Some(true));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let cli = parse(&["--route-prefix", "", "--jwt-sign-key", ""]);
        let mut config = ToolkitConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.routing.route_prefix.as_str(), "/");
        assert_eq!(config.auth.jwt_sign_key, "key_1234567890");
    }

    #[test]
    fn test_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nport = 7000\n\n[auth]\nbasic_auth_user = \"file-user\"").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            basic_auth_user: Some("flag-user".into()),
            ..Cli::default()
        };
        let config = load(&cli).unwrap();

        assert_eq!(config.listener.port, 7000);
        assert_eq!(config.auth.basic_auth_user, "flag-user");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Cli::default()
        };
        assert!(matches!(load(&cli), Err(ConfigError::Io { .. })));
    }
}
