use std::path::PathBuf;

use irblast_transport::TransportConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3022`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Preferred library document path.
    pub library_path: PathBuf,
    /// Fallback library document path, used when the preferred tier fails.
    pub library_fallback_path: PathBuf,
    /// Transport selected at startup.
    pub transport: TransportConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                        |
    /// |-------------------------|--------------------------------|
    /// | `HOST`                  | `0.0.0.0`                      |
    /// | `PORT`                  | `3022`                         |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                           |
    /// | `LIBRARY_PATH`          | `ir-library.json`              |
    /// | `LIBRARY_FALLBACK_PATH` | `.ir-library.fallback.json`    |
    /// | `IR_TRANSPORT`          | `mock`                         |
    ///
    /// Transport parameters: `SERIAL_DEVICE` (default `/dev/ttyUSB0`) and
    /// `SERIAL_BAUD` (default `9600`) for `serial`; `IR_HTTP_BASE_URL`
    /// (default `http://localhost:3022`) for `http`; `TASMOTA_DEVICE_IP`
    /// for `tasmota`; `UFO_DEVICE_IP` for `ufoR1`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3022".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let library_path =
            PathBuf::from(std::env::var("LIBRARY_PATH").unwrap_or_else(|_| "ir-library.json".into()));

        let library_fallback_path = PathBuf::from(
            std::env::var("LIBRARY_FALLBACK_PATH")
                .unwrap_or_else(|_| ".ir-library.fallback.json".into()),
        );

        let transport = transport_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            library_path,
            library_fallback_path,
            transport,
        }
    }
}

/// Build the startup [`TransportConfig`] from `IR_TRANSPORT` and its
/// per-transport parameter variables.
fn transport_from_env() -> TransportConfig {
    let kind = std::env::var("IR_TRANSPORT").unwrap_or_else(|_| "mock".into());
    match kind.as_str() {
        "mock" => TransportConfig::Mock,
        "serial" => TransportConfig::Serial {
            device: std::env::var("SERIAL_DEVICE").unwrap_or_else(|_| "/dev/ttyUSB0".into()),
            baud: std::env::var("SERIAL_BAUD")
                .unwrap_or_else(|_| "9600".into())
                .parse()
                .expect("SERIAL_BAUD must be a valid u32"),
        },
        "http" => TransportConfig::Http {
            base_url: std::env::var("IR_HTTP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3022".into()),
        },
        "tasmota" => TransportConfig::Tasmota {
            device_ip: std::env::var("TASMOTA_DEVICE_IP")
                .expect("TASMOTA_DEVICE_IP must be set for IR_TRANSPORT=tasmota"),
        },
        "ufoR1" => TransportConfig::UfoR1 {
            device_ip: std::env::var("UFO_DEVICE_IP")
                .expect("UFO_DEVICE_IP must be set for IR_TRANSPORT=ufoR1"),
        },
        other => panic!("IR_TRANSPORT must be one of mock|serial|http|tasmota|ufoR1, got '{other}'"),
    }
}
