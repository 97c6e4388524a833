use std::sync::Arc;

use crate::pipeline::Deidentifier;

/// Shared application state, injected into route handlers via Axum state.
///
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Deidentifier>,
}
