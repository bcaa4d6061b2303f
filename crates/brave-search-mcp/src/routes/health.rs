//! Health Routes - Liveness probe
//!
//! Reports that the process is up. Performs no dependency checks.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Debug, Serialize)]
pub struct HealthCheck {
    status: &'static str,
    service: &'static str,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
