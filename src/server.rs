//! HTTP endpoint exposing per-node and per-pod scheduling diagnostics.
//!
//! GET /node?name=<node>                     -> NodeMetrics as JSON
//! GET /pod?name=<pod>&namespace=<namespace> -> PodMetrics as JSON
//! GET /healthz                              -> liveness probe

use crate::error::SchedscopeError;
use crate::fetch::MetricsFetcher;
use crate::metrics::{node_metrics, pod_metrics, NodeMetrics, PodMetrics};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// State shared across handlers. Holds only immutable per-process values;
/// every request allocates its own accumulators.
pub struct AppState {
    pub fetcher: MetricsFetcher,
    pub scheduler_name: String,
}

impl IntoResponse for SchedscopeError {
    fn into_response(self) -> Response {
        let status = match self {
            SchedscopeError::MissingQueryParam(_) | SchedscopeError::LineMatchFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            SchedscopeError::NodeNotFound(_) | SchedscopeError::PodNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            SchedscopeError::UpstreamError(_) | SchedscopeError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct NodeQuery {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PodQuery {
    name: Option<String>,
    namespace: Option<String>,
}

async fn node_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NodeQuery>,
) -> Result<Json<NodeMetrics>, SchedscopeError> {
    let name = query.name.ok_or(SchedscopeError::MissingQueryParam("name"))?;
    info!("Processing node request for {}", name);

    let text = state.fetcher.fetch().await?;
    Ok(Json(node_metrics(&text, &name)?))
}

async fn pod_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PodQuery>,
) -> Result<Json<PodMetrics>, SchedscopeError> {
    // Validate the full query before touching the network.
    let name = query.name.ok_or(SchedscopeError::MissingQueryParam("name"))?;
    let namespace = query
        .namespace
        .ok_or(SchedscopeError::MissingQueryParam("namespace"))?;
    info!("Processing pod request for {}/{}", namespace, name);

    let text = state.fetcher.fetch().await?;
    Ok(Json(pod_metrics(&text, &name, &namespace, &state.scheduler_name)?))
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/node", get(node_handler))
        .route("/pod", get(pod_handler))
        .route("/healthz", get(health_handler))
        .with_state(state)
}

/// Serve the diagnostics API until the process is stopped.
pub async fn run_server(state: Arc<AppState>, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Diagnostics endpoint listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
