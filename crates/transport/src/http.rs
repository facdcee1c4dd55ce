//! HTTP transport for network IR blaster backends.
//!
//! POSTs a JSON envelope `{remote, key, encoding, data}` to
//! `{base_url}/api/ir/transmit` and requires a 2xx response.

use async_trait::async_trait;
use irblast_core::{KeyDefinition, LogicalKey};

use crate::{IrTransport, TransportError};

/// Transport speaking the generic IR backend wire format.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl IrTransport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn transmit(
        &self,
        remote_id: &str,
        key: LogicalKey,
        definition: &KeyDefinition,
    ) -> Result<(), TransportError> {
        let encoding = definition
            .encoding
            .as_ref()
            .ok_or(TransportError::MissingSignal)?;

        let body = serde_json::json!({
            "remote": remote_id,
            "key": key,
            "encoding": encoding.format,
            "data": encoding.data,
        });

        let response = self
            .client
            .post(format!("{}/api/ir/transmit", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        tracing::debug!(remote = remote_id, key = %key, base_url = %self.base_url, "HTTP transmission accepted");
        Ok(())
    }
}
