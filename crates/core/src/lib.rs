//! Core domain model for the IR blaster platform.
//!
//! Pure logic: no I/O, no async. Defines the remote-control library
//! (remotes, key definitions, key-set layouts, active selections) and the
//! best-effort signal translation helpers shared by the transport layer.

pub mod defaults;
pub mod error;
pub mod keys;
pub mod layout;
pub mod library;
pub mod pronto;
pub mod remote;
pub mod signal;

pub use error::CoreError;
pub use keys::LogicalKey;
pub use layout::{KeyPlacement, KeySetLayout};
pub use library::Library;
pub use remote::{KeyDefinition, RemoteDefinition};
pub use signal::{SignalEncoding, SignalFormat};
