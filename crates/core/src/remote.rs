//! Remote definitions and per-remote key definitions.

use serde::{Deserialize, Serialize};

use crate::keys::LogicalKey;
use crate::signal::SignalEncoding;

/// One taught (or not-yet-taught) button on a specific remote.
///
/// `encoding` is `None` for keys that are defined on the remote but have no
/// recorded signal yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    pub key: LogicalKey,
    pub label: String,
    pub encoding: Option<SignalEncoding>,
}

impl KeyDefinition {
    /// A taught key with a concrete encoding.
    pub fn taught(key: LogicalKey, encoding: SignalEncoding) -> Self {
        Self {
            key,
            label: key.default_label().to_string(),
            encoding: Some(encoding),
        }
    }

    /// A key defined on the remote but not yet taught.
    pub fn untaught(key: LogicalKey) -> Self {
        Self {
            key,
            label: key.default_label().to_string(),
            encoding: None,
        }
    }
}

/// A named physical device with its taught keys.
///
/// Identity (`id`) is immutable once created; keys may be added or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDefinition {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub preferred_key_set: Option<String>,
    pub keys: Vec<KeyDefinition>,
}

impl RemoteDefinition {
    /// Look up the key definition for a logical key role, if any.
    pub fn key_definition(&self, key: LogicalKey) -> Option<&KeyDefinition> {
        self.keys.iter().find(|k| k.key == key)
    }

    /// Add or replace the definition for a key role.
    pub fn upsert_key(&mut self, definition: KeyDefinition) {
        match self.keys.iter_mut().find(|k| k.key == definition.key) {
            Some(existing) => *existing = definition,
            None => self.keys.push(definition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalEncoding;

    fn make_remote() -> RemoteDefinition {
        RemoteDefinition {
            id: "test.v1".to_string(),
            manufacturer: "Acme".to_string(),
            model: "TV-1".to_string(),
            preferred_key_set: None,
            keys: vec![
                KeyDefinition::taught(LogicalKey::PowerToggle, SignalEncoding::nec("0x01,0x02")),
                KeyDefinition::untaught(LogicalKey::Menu),
            ],
        }
    }

    #[test]
    fn key_definition_lookup() {
        let remote = make_remote();
        assert!(remote.key_definition(LogicalKey::PowerToggle).is_some());
        assert!(remote.key_definition(LogicalKey::Digit5).is_none());

        let menu = remote.key_definition(LogicalKey::Menu).unwrap();
        assert!(menu.encoding.is_none());
    }

    #[test]
    fn upsert_key_replaces_existing() {
        let mut remote = make_remote();
        remote.upsert_key(KeyDefinition::taught(
            LogicalKey::Menu,
            SignalEncoding::nec("0x01,0x37"),
        ));
        assert_eq!(remote.keys.len(), 2);
        let menu = remote.key_definition(LogicalKey::Menu).unwrap();
        assert!(menu.encoding.is_some());
    }
}
