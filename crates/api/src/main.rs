use std::net::SocketAddr;
use std::sync::Arc;

use irblast_store::{FileBackend, LibraryService, TieredStore};
use irblast_transport::{build_transport, Dispatcher, TransportConfig};
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use irblast_api::config::ServerConfig;
use irblast_api::router::build_app_router;
use irblast_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irblast_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Library (tiered persistence: preferred file, then fallback file) ---
    let store = TieredStore::new(vec![
        Box::new(FileBackend::new(&config.library_path)),
        Box::new(FileBackend::new(&config.library_fallback_path)),
    ]);
    let library = Arc::new(LibraryService::open(store).await);
    tracing::info!(path = %config.library_path.display(), "Library opened");

    // --- Transport ---
    let http_client = reqwest::Client::new();
    let (transport_config, transport) =
        match build_transport(&config.transport, &http_client).await {
            Ok(transport) => (config.transport.clone(), transport),
            Err(e) => {
                // The system stays usable without hardware: fall back to
                // the mock transport and let the API switch later.
                tracing::warn!(
                    transport = config.transport.name(),
                    error = %e,
                    "Failed to start configured transport, falling back to mock",
                );
                let mock = build_transport(&TransportConfig::Mock, &http_client)
                    .await
                    .expect("mock transport construction cannot fail");
                (TransportConfig::Mock, mock)
            }
        };
    tracing::info!(transport = transport.name(), "Transport ready");

    let dispatcher = Arc::new(Dispatcher::with_transport(transport));

    // --- State & router ---
    let state = AppState {
        library,
        dispatcher,
        transport_config: Arc::new(RwLock::new(transport_config)),
        http_client,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, "IR blaster API listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
