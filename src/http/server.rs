//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all API handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Serve on a listener with graceful shutdown
//! - Expose the service status endpoint

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::TrackerConfig;
use crate::http::response::{ApiError, ApiResponse};
use crate::lifecycle;
use crate::observability::metrics;
use crate::projects::handlers as projects;
use crate::store::MockStore;
use crate::wallets::handlers as wallets;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MockStore>,
    pub started_at: Instant,
}

/// HTTP server for the tracker API.
pub struct HttpServer {
    router: Router,
    config: TrackerConfig,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: TrackerConfig, store: Arc<MockStore>) -> Self {
        let state = AppState {
            store,
            started_at: Instant::now(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &TrackerConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/status", get(get_status))
            .route(
                "/api/projects",
                get(projects::list_projects).post(projects::create_project),
            )
            .route("/api/projects/{id}", get(projects::get_project))
            .route("/api/wallets", get(wallets::list_wallets))
            .route(
                "/api/wallets/{address}/transactions",
                get(wallets::wallet_transactions),
            )
            // route_layer so MatchedPath is already routed when the metrics
            // middleware reads it
            .route_layer(middleware::from_fn(track_request))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TraceLayer::new_for_http())
                    // Body limit outside the timeout: Timeout must wrap a
                    // service whose response body implements Default to
                    // synthesize its 408, which Route's does and
                    // RequestBodyLimit's does not.
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until Ctrl+C or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(lifecycle::wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

/// Per-request metrics middleware.
async fn track_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    metrics::record_request(&method, &route, response.status().as_u16(), start);
    response
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub uptime_secs: u64,
    pub projects: usize,
    pub wallets: usize,
    pub transactions: usize,
}

/// `GET /api/status` — service liveness and store counts.
pub async fn get_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let (projects, wallets, transactions) = state.store.counts()?;

    Ok(Json(ApiResponse::record(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        uptime_secs: state.started_at.elapsed().as_secs(),
        projects,
        wallets,
        transactions,
    })))
}
