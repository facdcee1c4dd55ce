//! The transmit dispatcher.

use std::sync::Arc;

use irblast_core::{Library, LogicalKey};
use tokio::sync::RwLock;

use crate::mock::MockTransport;
use crate::{IrTransport, SendError};

/// Owns the single active transport and routes key presses to it.
///
/// Swapping the active transport is unconditional; there is no disconnect
/// callback on the replaced transport. A `send` snapshots the active
/// transport once before transmitting, so a concurrent swap never reroutes
/// an in-flight transmission; two overlapping sends race independently with
/// no queueing, retry, or cancellation.
pub struct Dispatcher {
    active: RwLock<Arc<dyn IrTransport>>,
}

impl Dispatcher {
    /// Dispatcher starting on the mock transport, so the system is usable
    /// without hardware.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(MockTransport::new()))
    }

    /// Dispatcher starting on a specific transport.
    pub fn with_transport(transport: Arc<dyn IrTransport>) -> Self {
        Self {
            active: RwLock::new(transport),
        }
    }

    /// Replace the active transport.
    pub async fn set_active(&self, transport: Arc<dyn IrTransport>) {
        tracing::info!(transport = transport.name(), "Active transport changed");
        *self.active.write().await = transport;
    }

    /// Handle to the current transport.
    pub async fn active(&self) -> Arc<dyn IrTransport> {
        Arc::clone(&*self.active.read().await)
    }

    /// Resolve a key press against the library and delegate to the active
    /// transport.
    ///
    /// Configuration errors (unknown remote, untaught key) surface before
    /// any transmission is attempted. Transport failures propagate as-is,
    /// never retried.
    pub async fn send(
        &self,
        library: &Library,
        remote_id: &str,
        key: LogicalKey,
    ) -> Result<(), SendError> {
        let remote = library
            .remote(remote_id)
            .ok_or_else(|| SendError::RemoteNotFound(remote_id.to_string()))?;

        let definition = remote
            .key_definition(key)
            .filter(|d| d.encoding.is_some())
            .ok_or(SendError::NoSignalConfigured(key))?;

        let transport = self.active().await;
        tracing::debug!(
            remote = remote_id,
            key = %key,
            transport = transport.name(),
            "Dispatching key press",
        );
        transport.transmit(remote_id, key, definition).await?;
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
