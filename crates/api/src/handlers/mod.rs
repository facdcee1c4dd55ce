//! HTTP handlers, grouped by resource.

pub mod health;
pub mod keysets;
pub mod library;
pub mod remotes;
pub mod transmit;
pub mod transport;
