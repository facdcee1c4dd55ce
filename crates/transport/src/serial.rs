//! Serial transport for USB/Arduino-style IR blasters.
//!
//! Speaks a line-oriented ASCII protocol: one `NEC:<address>,<command>\n`
//! command per key press. The device sketch parses the pair and emits the
//! 32-bit NEC frame. Requires an explicit [`connect`](SerialTransport::connect)
//! before transmission.

use async_trait::async_trait;
use irblast_core::pronto::pronto_to_nec;
use irblast_core::{KeyDefinition, LogicalKey, SignalFormat};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::{IrTransport, TransportError};

type SerialWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Line-oriented serial transport.
pub struct SerialTransport {
    device: String,
    writer: Mutex<Option<SerialWriter>>,
}

impl SerialTransport {
    /// Transport for a serial device path (e.g. `/dev/ttyUSB0`), not yet
    /// connected.
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            writer: Mutex::new(None),
        }
    }

    /// Transport over an already-open writer (tests, pipes).
    pub fn with_writer(
        device: impl Into<String>,
        writer: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        Self {
            device: device.into(),
            writer: Mutex::new(Some(Box::new(writer))),
        }
    }

    /// Open the device and configure the line at the given baud rate.
    ///
    /// The open and termios ioctls can stall on a slow device node, so they
    /// run on the blocking thread pool.
    pub async fn connect(&self, baud: u32) -> Result<(), TransportError> {
        let device = self.device.clone();
        let file = tokio::task::spawn_blocking(move || -> std::io::Result<std::fs::File> {
            let file = std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .open(&device)?;
            configure_line(&file, baud)?;
            Ok(file)
        })
        .await
        .map_err(std::io::Error::other)??;
        let file = tokio::fs::File::from_std(file);

        *self.writer.lock().await = Some(Box::new(file));
        tracing::info!(device = %self.device, baud, "Serial IR blaster connected");
        Ok(())
    }

    /// Drop the open writer, if any.
    pub async fn disconnect(&self) {
        if let Some(mut writer) = self.writer.lock().await.take() {
            if let Err(e) = writer.shutdown().await {
                tracing::warn!(device = %self.device, error = %e, "Serial shutdown failed");
            }
        }
    }

    /// Build the wire command for a key definition.
    ///
    /// NEC data passes through verbatim; Pronto goes through the lossy
    /// lookup translation. Everything else is unsupported on this wire.
    fn command_for(definition: &KeyDefinition) -> Result<String, TransportError> {
        let encoding = definition
            .encoding
            .as_ref()
            .ok_or(TransportError::MissingSignal)?;
        match encoding.format {
            SignalFormat::Nec => Ok(format!("NEC:{}\n", encoding.data)),
            SignalFormat::ProntoHex => Ok(format!("NEC:{}\n", pronto_to_nec(&encoding.data))),
            other => Err(TransportError::Unsupported(other)),
        }
    }
}

#[async_trait]
impl IrTransport for SerialTransport {
    fn name(&self) -> &'static str {
        "serial"
    }

    async fn transmit(
        &self,
        _remote_id: &str,
        key: LogicalKey,
        definition: &KeyDefinition,
    ) -> Result<(), TransportError> {
        let command = Self::command_for(definition)?;

        let mut guard = self.writer.lock().await;
        let writer = guard.as_mut().ok_or(TransportError::NotConnected)?;
        writer.write_all(command.as_bytes()).await?;
        writer.flush().await?;

        tracing::debug!(device = %self.device, key = %key, command = %command.trim_end(), "Serial command sent");
        Ok(())
    }
}

/// Put the line in raw mode at the requested baud rate.
#[cfg(unix)]
fn configure_line(file: &std::fs::File, baud: u32) -> std::io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let speed = match baud {
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => {
            tracing::warn!(baud = other, "Unsupported baud rate, using 9600");
            libc::B9600
        }
    };

    let fd = file.as_raw_fd();
    // SAFETY: fd is a valid open descriptor for the lifetime of `file`, and
    // termios is a plain C struct initialized by tcgetattr before use.
    unsafe {
        let mut tio: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(fd, &mut tio) != 0 {
            return Err(std::io::Error::last_os_error());
        }
        libc::cfmakeraw(&mut tio);
        libc::cfsetispeed(&mut tio, speed);
        libc::cfsetospeed(&mut tio, speed);
        if libc::tcsetattr(fd, libc::TCSANOW, &tio) != 0 {
            return Err(std::io::Error::last_os_error());
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_line(_file: &std::fs::File, _baud: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use irblast_core::pronto::TCL_POWER_PRONTO;
    use irblast_core::SignalEncoding;
    use tokio::io::AsyncReadExt;

    use super::*;

    fn nec_power() -> KeyDefinition {
        KeyDefinition::taught(LogicalKey::PowerToggle, SignalEncoding::nec("0x57E3,0x17"))
    }

    #[tokio::test]
    async fn nec_key_emits_exact_line_command() {
        let (writer, mut reader) = tokio::io::duplex(256);
        let transport = SerialTransport::with_writer("/dev/null", writer);

        transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &nec_power())
            .await
            .unwrap();

        let mut buf = vec![0u8; 64];
        let n = reader.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"NEC:0x57E3,0x17\n");
    }

    #[tokio::test]
    async fn pronto_key_is_translated_to_nec_command() {
        let (writer, mut reader) = tokio::io::duplex(256);
        let transport = SerialTransport::with_writer("/dev/null", writer);

        let definition = KeyDefinition::taught(
            LogicalKey::PowerToggle,
            SignalEncoding::new(SignalFormat::ProntoHex, TCL_POWER_PRONTO),
        );
        transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &definition)
            .await
            .unwrap();

        let mut buf = vec![0u8; 64];
        let n = reader.read(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"NEC:0x57E3,0x17\n");
    }

    #[tokio::test]
    async fn raw_timings_are_unsupported() {
        let (writer, _reader) = tokio::io::duplex(256);
        let transport = SerialTransport::with_writer("/dev/null", writer);

        let definition = KeyDefinition::taught(
            LogicalKey::PowerToggle,
            SignalEncoding::new(SignalFormat::RawTimings, "553,1684"),
        );
        let err = transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &definition)
            .await
            .unwrap_err();
        assert_matches!(err, TransportError::Unsupported(SignalFormat::RawTimings));
    }

    #[tokio::test]
    async fn connect_to_missing_device_is_an_io_error() {
        let transport = SerialTransport::new("/dev/does-not-exist");
        let err = transport.connect(9600).await.unwrap_err();
        assert_matches!(err, TransportError::Io(_));

        // A failed connect leaves the transport unusable.
        let err = transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &nec_power())
            .await
            .unwrap_err();
        assert_matches!(err, TransportError::NotConnected);
    }

    #[tokio::test]
    async fn transmit_without_connect_fails() {
        let transport = SerialTransport::new("/dev/ttyUSB0");
        let err = transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &nec_power())
            .await
            .unwrap_err();
        assert_matches!(err, TransportError::NotConnected);
    }

    #[tokio::test]
    async fn untaught_definition_is_rejected() {
        let (writer, _reader) = tokio::io::duplex(256);
        let transport = SerialTransport::with_writer("/dev/null", writer);

        let err = transport
            .transmit(
                "tclRokuTv.v1",
                LogicalKey::Menu,
                &KeyDefinition::untaught(LogicalKey::Menu),
            )
            .await
            .unwrap_err();
        assert_matches!(err, TransportError::MissingSignal);
    }

    #[tokio::test]
    async fn disconnect_drops_writer() {
        let (writer, _reader) = tokio::io::duplex(256);
        let transport = SerialTransport::with_writer("/dev/null", writer);

        transport.disconnect().await;
        let err = transport
            .transmit("tclRokuTv.v1", LogicalKey::PowerToggle, &nec_power())
            .await
            .unwrap_err();
        assert_matches!(err, TransportError::NotConnected);
    }
}
