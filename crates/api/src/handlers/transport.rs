//! Handlers for runtime transport selection.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use irblast_transport::{build_transport, TransportConfig};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/transport
///
/// The config of the currently selected transport.
pub async fn get_transport(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = state.transport_config.read().await.clone();
    Ok(Json(DataResponse { data: config }))
}

/// PUT /api/v1/transport
///
/// Build the described transport and swap it in. The swap is unconditional;
/// the previous transport gets no disconnect callback and any of its
/// in-flight transmissions complete on it.
pub async fn set_transport(
    State(state): State<AppState>,
    Json(config): Json<TransportConfig>,
) -> AppResult<impl IntoResponse> {
    let transport = build_transport(&config, &state.http_client).await?;
    state.dispatcher.set_active(transport).await;
    *state.transport_config.write().await = config.clone();

    tracing::info!(transport = config.name(), "Transport switched");
    Ok(Json(DataResponse { data: config }))
}
