use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness message expected by the front-end.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "status": "Urban Explorer API is running!" }))
}

/// Liveness endpoint for Docker/K8s.
///
/// Does not call Gemini; the provider is only exercised by real requests.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "quest-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
