//! Signal encodings.
//!
//! A [`SignalEncoding`] is the concrete IR waveform representation needed to
//! reproduce a button press: a format tag plus the encoded data string in
//! that format's textual convention (space-separated hex words for Pronto,
//! `0xADDR,0xCMD` pairs for NEC, comma-separated microseconds for raw
//! timings).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported IR signal representation formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalFormat {
    ProntoHex,
    Nec,
    Rc5,
    Rc6,
    RawTimings,
}

impl SignalFormat {
    /// The wire code for this format (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalFormat::ProntoHex => "prontoHex",
            SignalFormat::Nec => "nec",
            SignalFormat::Rc5 => "rc5",
            SignalFormat::Rc6 => "rc6",
            SignalFormat::RawTimings => "rawTimings",
        }
    }
}

impl fmt::Display for SignalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete encoded IR signal: format tag plus encoded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEncoding {
    pub format: SignalFormat,
    pub data: String,
}

impl SignalEncoding {
    pub fn new(format: SignalFormat, data: impl Into<String>) -> Self {
        Self {
            format,
            data: data.into(),
        }
    }

    /// Convenience constructor for NEC `0xADDR,0xCMD` pairs.
    pub fn nec(data: impl Into<String>) -> Self {
        Self::new(SignalFormat::Nec, data)
    }
}
