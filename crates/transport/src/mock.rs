//! No-hardware transport: logs what would have been sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use irblast_core::{KeyDefinition, LogicalKey, SignalFormat};

use crate::{IrTransport, TransportError};

/// Default simulated transmission latency.
const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Transport that logs the would-be transmission and always succeeds.
///
/// The default at startup so the system is usable without hardware. Keeps a
/// transmission counter so callers (and tests) can observe activity.
pub struct MockTransport {
    latency: Duration,
    sent: AtomicU64,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            sent: AtomicU64::new(0),
        }
    }

    /// Number of transmissions performed since construction.
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IrTransport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn transmit(
        &self,
        remote_id: &str,
        key: LogicalKey,
        definition: &KeyDefinition,
    ) -> Result<(), TransportError> {
        match &definition.encoding {
            Some(encoding) => {
                // Pronto sequences are long; preview the first eight words.
                let preview = match encoding.format {
                    SignalFormat::ProntoHex => {
                        let words: Vec<&str> =
                            encoding.data.split_ascii_whitespace().take(8).collect();
                        format!("{}...", words.join(" "))
                    }
                    _ => encoding.data.clone(),
                };
                tracing::info!(
                    remote = remote_id,
                    key = %key,
                    label = %definition.label,
                    encoding = %encoding.format,
                    signal = %preview,
                    at = %chrono::Utc::now().to_rfc3339(),
                    "Mock IR transmission",
                );
            }
            None => {
                tracing::warn!(
                    remote = remote_id,
                    key = %key,
                    "Mock transmission of key with no signal data",
                );
            }
        }

        tokio::time::sleep(self.latency).await;
        self.sent.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use irblast_core::SignalEncoding;

    use super::*;

    #[tokio::test]
    async fn always_succeeds_and_counts() {
        let mock = MockTransport::with_latency(Duration::ZERO);
        let definition = KeyDefinition::taught(
            LogicalKey::PowerToggle,
            SignalEncoding::nec("0x57E3,0x17"),
        );

        mock.transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &definition)
            .await
            .unwrap();
        mock.transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &definition)
            .await
            .unwrap();
        assert_eq!(mock.sent_count(), 2);
    }

    #[tokio::test]
    async fn accepts_untaught_definition() {
        let mock = MockTransport::with_latency(Duration::ZERO);
        let definition = KeyDefinition::untaught(LogicalKey::Menu);
        mock.transmit("tclRokuTv.v1", LogicalKey::Menu, &definition)
            .await
            .unwrap();
        assert_eq!(mock.sent_count(), 1);
    }
}
