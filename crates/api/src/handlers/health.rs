use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health
///
/// Liveness check: service version and the name of the active transport.
pub async fn health_check(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let transport = state.dispatcher.active().await;
    Ok(Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "transport": transport.name(),
    })))
}
