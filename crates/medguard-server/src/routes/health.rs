use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub detail: &'static str,
}

/// Liveness check. Does not touch the completion service or the tagger.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        detail: "Medguard backend is running",
    })
}
