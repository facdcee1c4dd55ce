//! Hardware transports and the transmit dispatcher.
//!
//! A transport is a strategy for delivering an encoded IR signal to
//! physical hardware. Exactly one transport is active at a time; the
//! [`Dispatcher`] owns that selection and routes logical key presses to it.
//!
//! The variant set is closed: every transport is one type implementing
//! [`IrTransport`], and runtime selection goes through
//! [`config::TransportConfig`], matched exhaustively in one place.

pub mod config;
pub mod dispatcher;
pub mod http;
pub mod mock;
pub mod serial;
pub mod tasmota;
pub mod ufo;

use async_trait::async_trait;
use irblast_core::{KeyDefinition, LogicalKey, SignalFormat};

pub use config::{build_transport, TransportConfig};
pub use dispatcher::Dispatcher;
pub use http::HttpTransport;
pub use mock::MockTransport;
pub use serial::SerialTransport;
pub use tasmota::TasmotaTransport;
pub use ufo::UfoR1Transport;

/// The single capability every transport provides: deliver one key press.
///
/// Each transport decides independently whether it has a "connected"
/// precondition and whether it enforces it before transmission (serial
/// does; the UFO-R1 deliberately does not).
#[async_trait]
pub trait IrTransport: Send + Sync {
    /// Stable transport name for logging and the API surface.
    fn name(&self) -> &'static str;

    /// Deliver the signal for one logical key press.
    async fn transmit(
        &self,
        remote_id: &str,
        key: LogicalKey,
        definition: &KeyDefinition,
    ) -> Result<(), TransportError>;
}

/// Transport-level failures (connectivity, encoding support, wire errors).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("transport not connected")]
    NotConnected,

    #[error("key definition has no recorded signal")]
    MissingSignal,

    #[error("encoding {0} not supported by this transport")]
    Unsupported(SignalFormat),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IR endpoint returned status {status}")]
    Status { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures from a full `send` resolution + dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    #[error("no signal configured for key {0}")]
    NoSignalConfigured(LogicalKey),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
