//! HTTP toolkit
//!
//! An HTTP inspection and synthetic-response server built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ─▶ http::server ─▶ middleware ─▶ route table
//!                                                                    │
//!                                      routing::fallback ◀───────────┘ (unmatched)
//!                                           │
//!     Client Response                       ▼
//!     ◀────────────── http::response ◀── handlers (inspect, status, random, ...)
//! ```

use clap::Parser;
use std::net::SocketAddr;
use std::process::ExitCode;

use http_toolkit::config::{self, validation::validate_config, Cli, ConfigError};
use http_toolkit::lifecycle::{announce, shutdown_signal, Shutdown};
use http_toolkit::net::listener;
use http_toolkit::observability::{logging, metrics};
use http_toolkit::HttpServer;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_tracing(&config.observability.log_level);

    if let Err(errors) = validate_config(&mut config) {
        tracing::error!("{}", ConfigError::Validation(errors));
        return ExitCode::FAILURE;
    }

    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(e) => tracing::error!(metrics_address = %addr, error = %e, "Invalid metrics address"),
        }
    }

    let listener = match listener::bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let server = HttpServer::new(config);
    announce(server.config(), &server.state().jwt);

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    if let Err(e) = server.run(listener, receiver).await {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
