//! Product Service JSON API Healthcheck Handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service liveness without touching the document store.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness handler
///
/// Pings the document store.
#[endpoint(
    tags("health"),
    summary = "Readiness check endpoint",
    responses(
        (status_code = 200, description = "Document store reachable"),
        (status_code = 503, description = "Document store unavailable"),
    ),
)]
pub(crate) async fn ready(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    depot.app_or_500()?.health.ping().await.map_err(|source| {
        error!("readiness ping failed: {source}");

        StatusError::service_unavailable().brief("Document store unavailable")
    })?;

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
    }))
}
