//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_tags: Option<usize>,
    pub timestamp: String,
}

/// GET /api/health
///
/// Reports readiness. The available-tag count exercises the tag
/// repository; a repository failure degrades the status instead of
/// erroring the endpoint.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, available_tags) = match state.service.available_tags().await {
        Ok(tags) => ("ok", Some(tags.len())),
        Err(err) => {
            tracing::warn!("health check failed to read tags: {err}");
            ("degraded", None)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        service: "pressroom-admin-api",
        version: env!("CARGO_PKG_VERSION"),
        available_tags,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
