//! Host and process information.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request},
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use sysinfo::System;

use crate::http::response::pretty_json;
use crate::http::server::AppState;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub architecture: String,
    pub cpu_count: usize,
    pub memory: String,
    pub rust_version: String,
    pub client_addr: String,
    pub server_host: String,
    pub uptime: String,
    pub process_uptime: String,
}

/// Whole decimal gigabytes, or `Unknown` when the total could not be read.
pub fn format_memory(total_bytes: u64) -> String {
    if total_bytes == 0 {
        return UNKNOWN.to_string();
    }
    format!("{}GB", total_bytes / 1000 / 1000 / 1000)
}

/// Compact duration such as `26h3m7s`.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, _) => format!("{minutes}m{seconds}s"),
        _ => format!("{hours}h{minutes}m{seconds}s"),
    }
}

pub async fn system_info(State(state): State<AppState>, request: Request<Body>) -> Response {
    let mut sys = System::new();
    sys.refresh_memory();

    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let server_host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().authority().map(|a| a.to_string()))
        .unwrap_or_default();

    let info = SystemInfo {
        hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
        os: std::env::consts::OS.to_string(),
        architecture: std::env::consts::ARCH.to_string(),
        cpu_count: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        memory: format_memory(sys.total_memory()),
        rust_version: env!("HTTP_TOOLKIT_RUSTC_VERSION").to_string(),
        client_addr,
        server_host,
        uptime: format_uptime(Duration::from_secs(System::uptime())),
        process_uptime: format_uptime(state.started_at.elapsed()),
    };

    pretty_json(&info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory(0), "Unknown");
        assert_eq!(format_memory(16_000_000_000), "16GB");
        assert_eq!(format_memory(17_179_869_184), "17GB");
        assert_eq!(format_memory(500_000_000), "0GB");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0s");
        assert_eq!(format_uptime(Duration::from_secs(59)), "59s");
        assert_eq!(format_uptime(Duration::from_secs(61)), "1m1s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(93_784)), "26h3m4s");
    }
}
