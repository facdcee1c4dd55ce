//! Runtime transport selection.
//!
//! [`TransportConfig`] is the closed set of transport variants as a tagged
//! serde enum, so API clients and environment configuration select among
//! them through one exhaustive match in [`build_transport`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http::HttpTransport;
use crate::mock::MockTransport;
use crate::serial::SerialTransport;
use crate::tasmota::TasmotaTransport;
use crate::ufo::UfoR1Transport;
use crate::{IrTransport, TransportError};

/// Default serial baud rate.
pub const DEFAULT_BAUD: u32 = 9_600;

fn default_baud() -> u32 {
    DEFAULT_BAUD
}

/// Declarative description of one transport, selectable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransportConfig {
    Mock,
    Serial {
        device: String,
        #[serde(default = "default_baud")]
        baud: u32,
    },
    Http {
        base_url: String,
    },
    Tasmota {
        device_ip: String,
    },
    UfoR1 {
        device_ip: String,
    },
}

impl TransportConfig {
    /// Stable name matching [`IrTransport::name`] of the built transport.
    pub fn name(&self) -> &'static str {
        match self {
            TransportConfig::Mock => "mock",
            TransportConfig::Serial { .. } => "serial",
            TransportConfig::Http { .. } => "http",
            TransportConfig::Tasmota { .. } => "tasmota",
            TransportConfig::UfoR1 { .. } => "ufoR1",
        }
    }
}

/// Build (and where applicable, connect) the transport a config describes.
///
/// Serial connects at the configured baud rate and fails if the device
/// cannot be opened. The UFO-R1 probe runs but cannot fail by policy.
pub async fn build_transport(
    config: &TransportConfig,
    client: &reqwest::Client,
) -> Result<Arc<dyn IrTransport>, TransportError> {
    match config {
        TransportConfig::Mock => Ok(Arc::new(MockTransport::new())),
        TransportConfig::Serial { device, baud } => {
            let transport = SerialTransport::new(device.clone());
            transport.connect(*baud).await?;
            Ok(Arc::new(transport))
        }
        TransportConfig::Http { base_url } => Ok(Arc::new(HttpTransport::with_client(
            client.clone(),
            base_url.clone(),
        ))),
        TransportConfig::Tasmota { device_ip } => Ok(Arc::new(TasmotaTransport::with_client(
            client.clone(),
            device_ip.clone(),
        ))),
        TransportConfig::UfoR1 { device_ip } => {
            let transport = UfoR1Transport::with_client(client.clone(), device_ip.clone());
            transport.probe().await;
            Ok(Arc::new(transport))
        }
    }
}
