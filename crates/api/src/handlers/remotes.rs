//! Handlers for the remote-definition library.
//!
//! A remote's identity (`id`) is immutable once created; an upsert with an
//! existing id replaces its content, an upsert without an id mints a fresh
//! one.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use irblast_core::remote::KeyDefinition;
use irblast_core::{CoreError, RemoteDefinition};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for PUT /api/v1/remotes.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertRemoteRequest {
    /// Omitted for a brand-new remote; a fresh id is minted.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "manufacturer must not be empty"))]
    pub manufacturer: String,
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    pub preferred_key_set: Option<String>,
    #[serde(default)]
    pub keys: Vec<KeyDefinition>,
}

/// Request body for PUT /api/v1/remotes/active (and keysets/active).
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    /// `null` clears the selection.
    pub id: Option<String>,
}

/// GET /api/v1/remotes
pub async fn list_remotes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let library = state.library.snapshot().await;
    Ok(Json(DataResponse {
        data: library.remotes,
    }))
}

/// GET /api/v1/remotes/{id}
pub async fn get_remote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let library = state.library.snapshot().await;
    let remote = library
        .remote(&id)
        .cloned()
        .ok_or(CoreError::NotFound {
            entity: "remote",
            id,
        })?;
    Ok(Json(DataResponse { data: remote }))
}

/// PUT /api/v1/remotes
pub async fn upsert_remote(
    State(state): State<AppState>,
    Json(input): Json<UpsertRemoteRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let remote = RemoteDefinition {
        id: input
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        manufacturer: input.manufacturer,
        model: input.model,
        preferred_key_set: input.preferred_key_set,
        keys: input.keys,
    };
    state.library.upsert_remote(remote.clone()).await?;

    tracing::info!(
        remote = %remote.id,
        keys = remote.keys.len(),
        "Remote definition upserted",
    );
    Ok(Json(DataResponse { data: remote }))
}

/// DELETE /api/v1/remotes/{id}
///
/// Deleting the active remote clears the active selection in the same
/// mutation; a dangling active id is never persisted.
pub async fn delete_remote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !state.library.delete_remote(&id).await? {
        return Err(CoreError::NotFound {
            entity: "remote",
            id,
        }
        .into());
    }

    tracing::info!(remote = %id, "Remote definition deleted");
    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": true }),
    }))
}

/// PUT /api/v1/remotes/active
pub async fn set_active_remote(
    State(state): State<AppState>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<impl IntoResponse> {
    state.library.set_active_remote(input.id.clone()).await?;
    Ok(Json(DataResponse {
        data: serde_json::json!({ "active_remote": input.id }),
    }))
}
