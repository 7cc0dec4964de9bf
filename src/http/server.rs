//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the page-serving handler
//! - Wire up middleware (timeout, request ID, tracing)
//! - Bind the server to a listener and run it to completion
//!
//! # Design Decisions
//! - Only GET is routed; other methods get Axum's default response
//! - The raw URI path is used as-is: no percent-decoding, so resolution
//!   stays a literal concatenation
//! - The synchronous serve core runs on the blocking pool; the router and
//!   handler are shared immutably via Arc

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::response;
use crate::serve::{render, RequestHandler, ServeError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

/// HTTP server for the static page service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    handler: Arc<RequestHandler>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only when no serve root is configured and the process working
    /// directory cannot be determined.
    pub fn new(config: ServerConfig) -> io::Result<Self> {
        let handler = Arc::new(RequestHandler::new(&config.serve)?);

        let state = AppState {
            handler: handler.clone(),
        };
        let router = Self::build_router(&config, state);

        Ok(Self {
            router,
            config,
            handler,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", get(serve_page))
            .route("/", get(serve_page))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.handler.root().display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The directory requests are resolved against.
    pub fn root(&self) -> &std::path::Path {
        self.handler.root()
    }
}

/// Main page handler.
/// Resolves the raw request path and serves the matching resource.
async fn serve_page(State(state): State<AppState>, request: Request<Body>) -> Response {
    let raw_path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        path = %raw_path,
        "handling request"
    );

    let handler = state.handler.clone();
    let path = raw_path.clone();
    let page = match tokio::task::spawn_blocking(move || handler.handle_request(&raw_path)).await {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "serve task failed");
            render::error_page(&path, &ServeError::UnknownObject { path: path.clone() })
        }
    };

    response::into_response(page)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
