//! Minimal SIDC handling: lookup normalization and standard identity.

/// Length of a normalized lookup code.
pub const CODE_LENGTH: usize = 10;

/// Character substituted for the masked positions.
const MASK: char = '*';

/// Normalizes a SIDC for registry lookup.
///
/// Keeps the first ten characters (padding with `-`), upper-cases them and
/// masks the standard identity (index 1) and status (index 3) positions, so
/// `SFTPE-----` and `GHTAE-----` both become `G*T*E-----`-style keys.
#[must_use]
pub fn normalize(sidc: &str) -> String {
    sidc.chars()
        .chain(std::iter::repeat('-'))
        .take(CODE_LENGTH)
        .enumerate()
        .map(|(i, c)| match i {
            1 | 3 => MASK,
            _ => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Standard identity (affiliation) of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardIdentity {
    Friend,
    Hostile,
    Neutral,
    Unknown,
}

/// Reads the standard identity from position 1 of a SIDC.
#[must_use]
pub fn standard_identity(sidc: &str) -> StandardIdentity {
    match sidc.chars().nth(1).map(|c| c.to_ascii_uppercase()) {
        Some('F' | 'A' | 'D' | 'M') => StandardIdentity::Friend,
        Some('H' | 'S' | 'J' | 'K') => StandardIdentity::Hostile,
        Some('N' | 'L') => StandardIdentity::Neutral,
        _ => StandardIdentity::Unknown,
    }
}
