//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_toolkit_requests_total` (counter): requests by method, status
//! - `http_toolkit_request_duration_seconds` (histogram): latency distribution

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start_time: Instant) {
    let status = status.to_string();
    counter!(
        "http_toolkit_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_toolkit_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start_time.elapsed().as_secs_f64());
}
