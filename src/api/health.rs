/// Health check endpoint
use crate::context::AppContext;
use axum::{response::Json, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Health status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always "OK" while the process can answer
    pub status: String,
    pub message: String,
    /// RFC 3339 time the check was answered
    pub timestamp: String,
}

/// Build health check routes
pub fn routes() -> Router<AppContext> {
    Router::new().route("/health", get(health_check))
}

/// Basic liveness check
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}
