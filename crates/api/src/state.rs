use std::sync::Arc;

use irblast_store::LibraryService;
use irblast_transport::{Dispatcher, TransportConfig};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The live library document plus persistence.
    pub library: Arc<LibraryService>,
    /// Owner of the single active transport.
    pub dispatcher: Arc<Dispatcher>,
    /// Config describing the currently selected transport.
    pub transport_config: Arc<RwLock<TransportConfig>>,
    /// Shared HTTP client for network transports (connection pooling).
    pub http_client: reqwest::Client,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
