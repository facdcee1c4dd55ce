//! Key-set layouts: grid placements of logical keys.
//!
//! A layout is a UI affordance independent of any specific remote; it says
//! where a key role sits on a button grid, not what signal it emits.

use serde::{Deserialize, Serialize};

use crate::keys::LogicalKey;

/// One key role placed at a (row, column) grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPlacement {
    pub key: LogicalKey,
    pub row: u8,
    pub column: u8,
}

/// A named grid layout of key roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySetLayout {
    pub id: String,
    pub placements: Vec<KeyPlacement>,
}
