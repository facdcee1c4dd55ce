//! Handlers for key-set layouts.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use irblast_core::CoreError;

use crate::error::AppResult;
use crate::handlers::remotes::SetActiveRequest;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/keysets
pub async fn list_key_sets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let library = state.library.snapshot().await;
    Ok(Json(DataResponse {
        data: library.key_sets,
    }))
}

/// PUT /api/v1/keysets/active
pub async fn set_active_key_set(
    State(state): State<AppState>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<impl IntoResponse> {
    state.library.set_active_key_set(input.id.clone()).await?;
    Ok(Json(DataResponse {
        data: serde_json::json!({ "active_key_set": input.id }),
    }))
}

/// DELETE /api/v1/keysets/{id}
///
/// Clears the active key-set selection when it referenced the deleted id.
pub async fn delete_key_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.library.delete_key_set(&id).await? {
        return Err(CoreError::NotFound {
            entity: "key set",
            id,
        }
        .into());
    }
    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": true }),
    }))
}
