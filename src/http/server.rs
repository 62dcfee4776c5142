//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the route table under the route prefix
//! - Wire up middleware (tracing, metrics, timeouts, body limits, debug)
//! - Serve static files or an SPA instead of the API when configured
//! - Bind the router to a listener, plaintext or TLS
//! - Stop gracefully on the shutdown signal

use axum::{
    body::Body,
    extract::State,
    handler::Handler,
    http::{header, HeaderValue, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get, MethodRouter},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::{ContentMode, ToolkitConfig};
use crate::error::ToolkitError;
use crate::handlers::{delay, health, info, inspect, random, status};
use crate::http::middleware::{request_debug_middleware, track_metrics};
use crate::net::tls::load_tls_config;
use crate::routing::{fallback, route_table, Endpoint, FallbackAction, Methods, RoutePrefix};
use crate::security::{basic_auth_middleware, jwt_auth_middleware, JwtAuth};

const SPA_INDEX: &str = "index.html";
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ToolkitConfig>,
    pub jwt: Arc<JwtAuth>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Arc<ToolkitConfig>) -> Self {
        let jwt = Arc::new(JwtAuth::new(&config.auth.jwt_sign_key));
        Self {
            config,
            jwt,
            started_at: Instant::now(),
        }
    }
}

/// HTTP server for the toolkit.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ToolkitConfig) -> Self {
        let state = AppState::new(Arc::new(config));
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// The fully layered router, for in-memory testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ToolkitConfig {
        &self.state.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ToolkitError> {
        let addr = listener.local_addr()?;
        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        let listener_config = &self.state.config.listener;
        match (&listener_config.cert_path, listener_config.use_tls) {
            (Some(cert_dir), true) => {
                let tls = load_tls_config(cert_dir).await?;
                tracing::info!(address = %addr, "Server started with TLS");

                let handle = axum_server::Handle::new();
                let shutdown_handle = handle.clone();
                tokio::spawn(async move {
                    wait_for_shutdown(shutdown).await;
                    shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
                });

                axum_server::from_tcp_rustls(listener.into_std()?, tls)
                    .handle(handle)
                    .serve(app)
                    .await?;
            }
            _ => {
                tracing::info!(address = %addr, "Server started");
                axum::serve(listener, app)
                    .with_graceful_shutdown(wait_for_shutdown(shutdown))
                    .await?;
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn wait_for_shutdown(mut shutdown: broadcast::Receiver<()>) {
    let _ = shutdown.recv().await;
    tracing::info!("Shutdown signal received");
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let prefix = &config.routing.route_prefix;

    let router = match config.content.mode() {
        ContentMode::Static(dir) => {
            tracing::info!(path = %dir.display(), "Serving static files");
            content_router(prefix, ServeDir::new(dir))
        }
        ContentMode::Spa(dir) => {
            tracing::info!(path = %dir.display(), "Serving SPA");
            content_router(prefix, ServeDir::new(dir).fallback(ServeFile::new(dir.join(SPA_INDEX))))
        }
        ContentMode::Api => api_router(state),
    };

    router
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(middleware::from_fn(track_metrics))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Mount every table entry under the prefix, then the fallback.
fn api_router(state: AppState) -> Router {
    let prefix = state.config.routing.route_prefix.clone();
    let mut router = Router::new();

    for entry in route_table() {
        let method_router = endpoint_router(entry.endpoint, entry.methods, &state);
        for path in prefix.mount_paths(entry.path) {
            router = router.route(&path, method_router.clone());
        }
    }

    let router = router.fallback(dispatch_fallback);
    let router = if state.config.debug.request_debug {
        router.layer(middleware::from_fn_with_state(state.clone(), request_debug_middleware))
    } else {
        router
    };

    router.with_state(state)
}

fn on<H, T>(methods: Methods, handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    match methods {
        Methods::Get => get(handler),
        Methods::Any => any(handler),
    }
}

fn endpoint_router(endpoint: Endpoint, methods: Methods, state: &AppState) -> MethodRouter<AppState> {
    match endpoint {
        Endpoint::Health => on(methods, health::ok),
        Endpoint::Info => on(methods, info::system_info),
        Endpoint::Status => on(methods, status::status_code),
        Endpoint::Word => on(methods, random::random_word),
        Endpoint::Number => on(methods, random::random_number),
        Endpoint::Uuid => on(methods, random::random_uuid),
        Endpoint::Delay => on(methods, delay::delay),
        Endpoint::Inspect => on(methods, inspect::inspect),
        Endpoint::BasicAuth => on(methods, health::ok)
            .layer(middleware::from_fn_with_state(state.clone(), basic_auth_middleware)),
        Endpoint::JwtAuth => on(methods, health::ok)
            .layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware)),
    }
}

/// Requests no static route claimed.
async fn dispatch_fallback(State(state): State<AppState>, request: Request<Body>) -> Response {
    let routing = &state.config.routing;
    let action = fallback::resolve(
        routing.fallback_mode(),
        &routing.route_prefix,
        request.method(),
        request.uri().path(),
    );

    match action {
        FallbackAction::Health => health::ok().await.into_response(),
        FallbackAction::Inspect => inspect::inspect(State(state), request).await,
        FallbackAction::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

/// File serving under the prefix, never cached by clients.
fn content_router<S>(prefix: &RoutePrefix, service: S) -> Router
where
    S: tower::Service<Request<Body>, Error = std::convert::Infallible> + Clone + Send + Sync + 'static,
    S::Response: IntoResponse,
    S::Future: Send + 'static,
{
    let router = if prefix.is_root() {
        Router::new().fallback_service(service)
    } else {
        Router::new().nest_service(prefix.base(), service)
    };

    router.layer(SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    ))
}
