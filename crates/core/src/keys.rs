//! Logical key roles.
//!
//! A [`LogicalKey`] identifies *what the user pressed*: an abstract button
//! role independent of any physical remote or signal encoding. The serialized
//! codes (`powerToggle`, `digit0`, ...) are the wire format used both in the
//! persisted library document and in the HTTP transmit envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract remote-control button role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicalKey {
    PowerToggle,
    VolumeIncrease,
    VolumeDecrease,
    MuteToggle,
    ChannelIncrease,
    ChannelDecrease,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    NavigateOk,
    Back,
    Menu,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    InputSelect,
}

impl LogicalKey {
    /// All key roles, in display order.
    pub const ALL: [LogicalKey; 24] = [
        LogicalKey::PowerToggle,
        LogicalKey::VolumeIncrease,
        LogicalKey::VolumeDecrease,
        LogicalKey::MuteToggle,
        LogicalKey::ChannelIncrease,
        LogicalKey::ChannelDecrease,
        LogicalKey::NavigateUp,
        LogicalKey::NavigateDown,
        LogicalKey::NavigateLeft,
        LogicalKey::NavigateRight,
        LogicalKey::NavigateOk,
        LogicalKey::Back,
        LogicalKey::Menu,
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
        LogicalKey::InputSelect,
    ];

    /// The wire code for this key role (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalKey::PowerToggle => "powerToggle",
            LogicalKey::VolumeIncrease => "volumeIncrease",
            LogicalKey::VolumeDecrease => "volumeDecrease",
            LogicalKey::MuteToggle => "muteToggle",
            LogicalKey::ChannelIncrease => "channelIncrease",
            LogicalKey::ChannelDecrease => "channelDecrease",
            LogicalKey::NavigateUp => "navigateUp",
            LogicalKey::NavigateDown => "navigateDown",
            LogicalKey::NavigateLeft => "navigateLeft",
            LogicalKey::NavigateRight => "navigateRight",
            LogicalKey::NavigateOk => "navigateOk",
            LogicalKey::Back => "back",
            LogicalKey::Menu => "menu",
            LogicalKey::Digit0 => "digit0",
            LogicalKey::Digit1 => "digit1",
            LogicalKey::Digit2 => "digit2",
            LogicalKey::Digit3 => "digit3",
            LogicalKey::Digit4 => "digit4",
            LogicalKey::Digit5 => "digit5",
            LogicalKey::Digit6 => "digit6",
            LogicalKey::Digit7 => "digit7",
            LogicalKey::Digit8 => "digit8",
            LogicalKey::Digit9 => "digit9",
            LogicalKey::InputSelect => "inputSelect",
        }
    }

    /// Short human-readable label used when seeding key definitions.
    pub fn default_label(&self) -> &'static str {
        match self {
            LogicalKey::PowerToggle => "Power",
            LogicalKey::VolumeIncrease => "Vol +",
            LogicalKey::VolumeDecrease => "Vol -",
            LogicalKey::MuteToggle => "Mute",
            LogicalKey::ChannelIncrease => "Ch +",
            LogicalKey::ChannelDecrease => "Ch -",
            LogicalKey::NavigateUp => "Up",
            LogicalKey::NavigateDown => "Down",
            LogicalKey::NavigateLeft => "Left",
            LogicalKey::NavigateRight => "Right",
            LogicalKey::NavigateOk => "OK",
            LogicalKey::Back => "Back",
            LogicalKey::Menu => "Menu",
            LogicalKey::Digit0 => "0",
            LogicalKey::Digit1 => "1",
            LogicalKey::Digit2 => "2",
            LogicalKey::Digit3 => "3",
            LogicalKey::Digit4 => "4",
            LogicalKey::Digit5 => "5",
            LogicalKey::Digit6 => "6",
            LogicalKey::Digit7 => "7",
            LogicalKey::Digit8 => "8",
            LogicalKey::Digit9 => "9",
            LogicalKey::InputSelect => "Input",
        }
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_camel_case_wire_codes() {
        let json = serde_json::to_string(&LogicalKey::PowerToggle).unwrap();
        assert_eq!(json, "\"powerToggle\"");
        let json = serde_json::to_string(&LogicalKey::Digit0).unwrap();
        assert_eq!(json, "\"digit0\"");
        let json = serde_json::to_string(&LogicalKey::NavigateOk).unwrap();
        assert_eq!(json, "\"navigateOk\"");
    }

    #[test]
    fn wire_codes_round_trip() {
        for key in LogicalKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            let back: LogicalKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }
}
