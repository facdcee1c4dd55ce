pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /library                 full library document (GET)
///
/// /remotes                 list (GET), upsert (PUT)
/// /remotes/active          select active remote (PUT)
/// /remotes/{id}            get, delete
///
/// /keysets                 list (GET)
/// /keysets/active          select active key set (PUT)
/// /keysets/{id}            delete
///
/// /transport               current transport config (GET), switch (PUT)
/// /transmit                resolved key press (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/library", get(handlers::library::get_library))
        .route(
            "/remotes",
            get(handlers::remotes::list_remotes).put(handlers::remotes::upsert_remote),
        )
        .route("/remotes/active", put(handlers::remotes::set_active_remote))
        .route(
            "/remotes/{id}",
            get(handlers::remotes::get_remote).delete(handlers::remotes::delete_remote),
        )
        .route("/keysets", get(handlers::keysets::list_key_sets))
        .route("/keysets/active", put(handlers::keysets::set_active_key_set))
        .route("/keysets/{id}", delete(handlers::keysets::delete_key_set))
        .route(
            "/transport",
            get(handlers::transport::get_transport).put(handlers::transport::set_transport),
        )
        .route("/transmit", post(handlers::transmit::transmit_key))
}

/// Root-level wire-format route: the plain IR backend envelope.
pub fn wire_routes() -> Router<AppState> {
    Router::new().route("/api/ir/transmit", post(handlers::transmit::transmit_envelope))
}
