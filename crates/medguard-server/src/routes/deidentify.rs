use axum::Json;
use axum::extract::State;

use medguard_core::models::deidentify::{DeidentifyRequest, DeidentifyResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// De-identify a clinical note.
///
/// The pipeline makes blocking calls to the completion service and the
/// tagger, so it runs on the blocking thread pool.
pub async fn deidentify(
    State(state): State<AppState>,
    Json(req): Json<DeidentifyRequest>,
) -> Result<Json<DeidentifyResponse>, ApiError> {
    let pipeline = state.pipeline.clone();

    let response = tokio::task::spawn_blocking(move || pipeline.deidentify(&req.note))
        .await
        .map_err(|e| ApiError::Internal(format!("pipeline task failed: {e}")))??;

    Ok(Json(response))
}
