//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};
use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

pub const CERT_FILE: &str = "cert.pem";
pub const KEY_FILE: &str = "key.pem";

/// Error type for TLS setup.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("{file} not found in cert path {dir:?}")]
    Missing { file: &'static str, dir: PathBuf },

    #[error("failed to load TLS material: {0}")]
    Load(#[from] std::io::Error),
}

/// Certificate and key file locations inside a cert directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertFiles {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Locate `cert.pem` and `key.pem` in `dir`, failing if either is absent.
pub fn find_cert_files(dir: &Path) -> Result<CertFiles, TlsError> {
    let cert = dir.join(CERT_FILE);
    if !cert.exists() {
        return Err(TlsError::Missing { file: CERT_FILE, dir: dir.to_path_buf() });
    }

    let key = dir.join(KEY_FILE);
    if !key.exists() {
        return Err(TlsError::Missing { file: KEY_FILE, dir: dir.to_path_buf() });
    }

    Ok(CertFiles { cert, key })
}

/// Load rustls configuration from the PEM files in `dir`.
pub async fn load_tls_config(dir: &Path) -> Result<RustlsConfig, TlsError> {
    let files = find_cert_files(dir)?;
    Ok(RustlsConfig::from_pem_file(files.cert, files.key).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cert_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_cert_files(dir.path()).unwrap_err();
        assert!(matches!(err, TlsError::Missing { file: CERT_FILE, .. }));
    }

    #[test]
    fn test_finds_both_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CERT_FILE), "").unwrap();
        std::fs::write(dir.path().join(KEY_FILE), "").unwrap();

        let files = find_cert_files(dir.path()).unwrap();
        assert_eq!(files.cert, dir.path().join("cert.pem"));
        assert_eq!(files.key, dir.path().join("key.pem"));
    }

    #[tokio::test]
    async fn test_garbage_pem_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CERT_FILE), "not a cert").unwrap();
        std::fs::write(dir.path().join(KEY_FILE), "not a key").unwrap();

        assert!(matches!(load_tls_config(dir.path()).await, Err(TlsError::Load(_))));
    }
}
