use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/library
///
/// The full library document: remotes, key sets, active selections.
pub async fn get_library(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let library = state.library.snapshot().await;
    Ok(Json(DataResponse { data: library }))
}
