//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its storage:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (pings the store)
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::adapters::SharedStore;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Storage adapter probed by the readiness check
    pub store: SharedStore,
}

impl HealthState {
    /// Create new health state around the store
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// Readiness probe response body
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// "ready" or "unavailable"
    pub status: &'static str,
    /// Storage backend name
    pub storage: &'static str,
    /// Failure detail when not ready
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Does not touch storage; that is what readiness is for.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - checks that the store can serve requests
///
/// # Response
/// - 200 OK if the store answered
/// - 503 Service Unavailable otherwise
async fn readiness_probe(State(state): State<HealthState>) -> impl IntoResponse {
    let storage = state.store.backend();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                storage,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, storage, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    storage,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
