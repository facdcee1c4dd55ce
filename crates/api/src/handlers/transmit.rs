//! Handlers for IR transmission.
//!
//! Two surfaces: the library-resolved key press (`/api/v1/transmit`) and
//! the raw wire envelope (`/api/ir/transmit`) for callers that already
//! carry an encoded signal.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use irblast_core::remote::KeyDefinition;
use irblast_core::{LogicalKey, SignalEncoding, SignalFormat};
use irblast_transport::SendError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /api/v1/transmit.
#[derive(Debug, Deserialize)]
pub struct TransmitRequest {
    /// Remote id; `null` means the active remote.
    pub remote: Option<String>,
    pub key: LogicalKey,
}

/// Request body for POST /api/ir/transmit: the IR backend wire format.
#[derive(Debug, Deserialize)]
pub struct TransmitEnvelope {
    pub remote: String,
    pub key: LogicalKey,
    pub encoding: SignalFormat,
    pub data: String,
}

/// POST /api/v1/transmit
///
/// Resolve a logical key press against the library and dispatch it through
/// the active transport.
pub async fn transmit_key(
    State(state): State<AppState>,
    Json(input): Json<TransmitRequest>,
) -> AppResult<impl IntoResponse> {
    let library = state.library.snapshot().await;

    let remote_id = match input.remote {
        Some(id) => id,
        None => library
            .active_remote_definition()
            .map(|r| r.id.clone())
            .ok_or_else(|| AppError::BadRequest("no remote selected".to_string()))?,
    };

    state
        .dispatcher
        .send(&library, &remote_id, input.key)
        .await?;

    let transport = state.dispatcher.active().await;
    Ok(Json(DataResponse {
        data: serde_json::json!({
            "remote": remote_id,
            "key": input.key,
            "transport": transport.name(),
        }),
    }))
}

/// POST /api/ir/transmit
///
/// Transmit a literal encoded signal through the active transport without
/// consulting the library.
pub async fn transmit_envelope(
    State(state): State<AppState>,
    Json(envelope): Json<TransmitEnvelope>,
) -> AppResult<impl IntoResponse> {
    let definition = KeyDefinition {
        key: envelope.key,
        label: envelope.key.default_label().to_string(),
        encoding: Some(SignalEncoding::new(envelope.encoding, envelope.data)),
    };

    let transport = state.dispatcher.active().await;
    transport
        .transmit(&envelope.remote, envelope.key, &definition)
        .await
        .map_err(SendError::Transport)?;

    Ok(Json(DataResponse {
        data: serde_json::json!({
            "remote": envelope.remote,
            "key": envelope.key,
            "transport": transport.name(),
        }),
    }))
}
