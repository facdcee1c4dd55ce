//! First-run seed data.
//!
//! Seeds the library with a TCL Roku TV remote (the one device the project
//! shipped taught codes for) and two key-set layouts. The NEC pairs use the
//! 0x57E3 extended address common to TCL Roku models.

use crate::keys::LogicalKey;
use crate::layout::{KeyPlacement, KeySetLayout};
use crate::library::Library;
use crate::remote::{KeyDefinition, RemoteDefinition};
use crate::signal::SignalEncoding;

/// Id of the seeded TCL Roku TV remote.
pub const TCL_ROKU_REMOTE_ID: &str = "tclRokuTv.v1";

/// Id of the compact 3-column layout.
pub const STANDARD_KEY_SET_ID: &str = "standardTvKeySet.v1";

/// Id of the full layout including the numeric pad.
pub const FULL_KEY_SET_ID: &str = "fullTvKeySet.v1";

/// Taught NEC commands for the TCL Roku TV remote.
const TCL_NEC_CODES: &[(LogicalKey, &str)] = &[
    (LogicalKey::PowerToggle, "0x57E3,0x17"),
    (LogicalKey::VolumeIncrease, "0x57E3,0x0F"),
    (LogicalKey::VolumeDecrease, "0x57E3,0x10"),
    (LogicalKey::MuteToggle, "0x57E3,0x09"),
    (LogicalKey::ChannelIncrease, "0x57E3,0x20"),
    (LogicalKey::ChannelDecrease, "0x57E3,0x21"),
    (LogicalKey::NavigateUp, "0x57E3,0x19"),
    (LogicalKey::NavigateDown, "0x57E3,0x33"),
    (LogicalKey::NavigateLeft, "0x57E3,0x1E"),
    (LogicalKey::NavigateRight, "0x57E3,0x1F"),
    (LogicalKey::NavigateOk, "0x57E3,0x18"),
    (LogicalKey::Back, "0x57E3,0x66"),
    (LogicalKey::Menu, "0x57E3,0x37"),
    (LogicalKey::InputSelect, "0x57E3,0x2F"),
];

/// Digit keys exist on the physical remote but ship untaught.
const UNTAUGHT_KEYS: &[LogicalKey] = &[
    LogicalKey::Digit0,
    LogicalKey::Digit1,
    LogicalKey::Digit2,
    LogicalKey::Digit3,
    LogicalKey::Digit4,
    LogicalKey::Digit5,
    LogicalKey::Digit6,
    LogicalKey::Digit7,
    LogicalKey::Digit8,
    LogicalKey::Digit9,
];

/// Compact 3-column grid: power row, volume/channel rockers, d-pad.
const STANDARD_TV_PLACEMENTS: &[(LogicalKey, u8, u8)] = &[
    (LogicalKey::PowerToggle, 0, 0),
    (LogicalKey::InputSelect, 0, 1),
    (LogicalKey::MuteToggle, 0, 2),
    (LogicalKey::VolumeIncrease, 1, 0),
    (LogicalKey::NavigateUp, 1, 1),
    (LogicalKey::ChannelIncrease, 1, 2),
    (LogicalKey::VolumeDecrease, 2, 0),
    (LogicalKey::NavigateOk, 2, 1),
    (LogicalKey::ChannelDecrease, 2, 2),
    (LogicalKey::NavigateLeft, 3, 0),
    (LogicalKey::NavigateDown, 3, 1),
    (LogicalKey::NavigateRight, 3, 2),
];

/// Full layout: power row, rockers around a d-pad, numeric pad below.
const FULL_TV_PLACEMENTS: &[(LogicalKey, u8, u8)] = &[
    (LogicalKey::PowerToggle, 0, 0),
    (LogicalKey::InputSelect, 0, 1),
    (LogicalKey::Menu, 0, 2),
    (LogicalKey::MuteToggle, 0, 3),
    (LogicalKey::VolumeIncrease, 1, 0),
    (LogicalKey::ChannelIncrease, 1, 3),
    (LogicalKey::NavigateUp, 2, 2),
    (LogicalKey::VolumeDecrease, 3, 0),
    (LogicalKey::NavigateLeft, 3, 1),
    (LogicalKey::NavigateOk, 3, 2),
    (LogicalKey::NavigateRight, 3, 3),
    (LogicalKey::ChannelDecrease, 3, 4),
    (LogicalKey::Back, 4, 1),
    (LogicalKey::NavigateDown, 4, 2),
    (LogicalKey::Digit1, 5, 0),
    (LogicalKey::Digit2, 5, 1),
    (LogicalKey::Digit3, 5, 2),
    (LogicalKey::Digit4, 6, 0),
    (LogicalKey::Digit5, 6, 1),
    (LogicalKey::Digit6, 6, 2),
    (LogicalKey::Digit7, 7, 0),
    (LogicalKey::Digit8, 7, 1),
    (LogicalKey::Digit9, 7, 2),
    (LogicalKey::Digit0, 8, 1),
];

fn layout_from(id: &str, placements: &[(LogicalKey, u8, u8)]) -> KeySetLayout {
    KeySetLayout {
        id: id.to_string(),
        placements: placements
            .iter()
            .map(|&(key, row, column)| KeyPlacement { key, row, column })
            .collect(),
    }
}

/// The seeded TCL Roku TV remote: 14 taught NEC keys plus untaught digits.
pub fn tcl_roku_remote() -> RemoteDefinition {
    let mut keys: Vec<KeyDefinition> = TCL_NEC_CODES
        .iter()
        .map(|&(key, code)| KeyDefinition::taught(key, SignalEncoding::nec(code)))
        .collect();
    keys.extend(UNTAUGHT_KEYS.iter().map(|&key| KeyDefinition::untaught(key)));

    RemoteDefinition {
        id: TCL_ROKU_REMOTE_ID.to_string(),
        manufacturer: "TCL".to_string(),
        model: "Roku TV".to_string(),
        preferred_key_set: Some(FULL_KEY_SET_ID.to_string()),
        keys,
    }
}

/// Build the first-run library: one remote, two layouts, both selections set.
pub fn seed_library() -> Library {
    let remote = tcl_roku_remote();
    let active_remote = Some(remote.id.clone());
    Library {
        remotes: vec![remote],
        key_sets: vec![
            layout_from(STANDARD_KEY_SET_ID, STANDARD_TV_PLACEMENTS),
            layout_from(FULL_KEY_SET_ID, FULL_TV_PLACEMENTS),
        ],
        active_remote,
        active_key_set: Some(FULL_KEY_SET_ID.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_selections_reference_existing_entities() {
        let library = seed_library();
        let remote_id = library.active_remote.clone().unwrap();
        assert!(library.remote(&remote_id).is_some());
        let key_set_id = library.active_key_set.clone().unwrap();
        assert!(library.key_set(&key_set_id).is_some());
    }

    #[test]
    fn seeded_remote_has_taught_power_and_untaught_digits() {
        let remote = tcl_roku_remote();
        let power = remote.key_definition(LogicalKey::PowerToggle).unwrap();
        let encoding = power.encoding.as_ref().unwrap();
        assert_eq!(encoding.data, "0x57E3,0x17");

        let digit = remote.key_definition(LogicalKey::Digit0).unwrap();
        assert!(digit.encoding.is_none());
    }

    #[test]
    fn layouts_place_each_key_once() {
        let library = seed_library();
        for layout in &library.key_sets {
            let mut seen = std::collections::HashSet::new();
            for placement in &layout.placements {
                assert!(
                    seen.insert(placement.key),
                    "{} placed twice in {}",
                    placement.key,
                    layout.id
                );
            }
        }
    }
}
