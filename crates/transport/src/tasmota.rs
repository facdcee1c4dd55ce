//! Tasmota transport for ESP8266/ESP32 devices running Tasmota IR.
//!
//! Tasmota takes commands over its `/cm` endpoint as a query string:
//! `GET http://<ip>/cm?cmnd=IRsend <json>`. Delivery is best-effort; the
//! device response is not validated.

use async_trait::async_trait;
use irblast_core::pronto::pronto_to_timings;
use irblast_core::{KeyDefinition, LogicalKey, SignalFormat};

use crate::{IrTransport, TransportError};

/// Transport for a Tasmota IR device on the local network.
pub struct TasmotaTransport {
    client: reqwest::Client,
    device_ip: String,
}

impl TasmotaTransport {
    pub fn new(device_ip: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), device_ip)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, device_ip: impl Into<String>) -> Self {
        Self {
            client,
            device_ip: device_ip.into(),
        }
    }

    /// Build the `IRsend` command payload for a key definition.
    fn payload_for(definition: &KeyDefinition) -> Result<String, TransportError> {
        let encoding = definition
            .encoding
            .as_ref()
            .ok_or(TransportError::MissingSignal)?;
        match encoding.format {
            // Tasmota understands NEC natively.
            SignalFormat::Nec => Ok(format!(
                r#"{{"Protocol":"NEC","Bits":32,"Data":"{}"}}"#,
                encoding.data
            )),
            SignalFormat::ProntoHex => {
                let timings: Vec<String> = pronto_to_timings(&encoding.data)
                    .iter()
                    .map(u32::to_string)
                    .collect();
                Ok(format!(
                    r#"{{"Protocol":"RAW","Data":"{}"}}"#,
                    timings.join(",")
                ))
            }
            other => Err(TransportError::Unsupported(other)),
        }
    }
}

#[async_trait]
impl IrTransport for TasmotaTransport {
    fn name(&self) -> &'static str {
        "tasmota"
    }

    async fn transmit(
        &self,
        _remote_id: &str,
        key: LogicalKey,
        definition: &KeyDefinition,
    ) -> Result<(), TransportError> {
        let payload = Self::payload_for(definition)?;

        // Device response is deliberately not validated (best-effort).
        self.client
            .get(format!("http://{}/cm", self.device_ip))
            .query(&[("cmnd", format!("IRsend {payload}"))])
            .send()
            .await?;

        tracing::debug!(device_ip = %self.device_ip, key = %key, "Tasmota command dispatched");
        Ok(())
    }
}
