//! Error types for enigma-core.
//!
//! Every failure the simulator can report is a configuration failure: a bad
//! alphabet, a malformed cycle, a rotor assignment that does not fit the
//! machine, or input text that ends too early. None of them is recoverable for
//! the current run, so callers propagate with `?` up to the top level.

use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type EnigmaResult<T> = Result<T, EnigmaError>;

/// Errors produced by enigma-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// The alphabet string is empty, repeats a symbol, or uses a reserved character.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// A symbol is not a member of the machine alphabet.
    #[error("symbol '{0}' is not in the alphabet")]
    UnknownSymbol(char),

    /// An alphabet index outside `[0, size)`.
    #[error("index {index} out of range for alphabet of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A cycle-notation specification could not be parsed.
    #[error("malformed cycle: {0}")]
    MalformedCycle(String),

    /// Configuration or setup text ended before a required token.
    #[error("truncated input: {0}")]
    Truncated(String),

    /// Structurally valid tokens that violate a machine constraint.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rotor descriptor type tag other than `M`, `N` or `R`.
    #[error("unknown rotor type '{tag}' for rotor {rotor}")]
    UnknownRotorType { rotor: String, tag: String },

    /// Notch symbols on a rotor that cannot carry them, or not in the alphabet.
    #[error("invalid notch for rotor {rotor}: {reason}")]
    InvalidNotch { rotor: String, reason: String },

    /// Attempt to move a reflector away from position 0.
    #[error("reflector {0} has only one position")]
    ReflectorPosition(String),

    /// Rotor position outside the alphabet.
    #[error("position {position} out of range for rotor {rotor}")]
    PositionOutOfRange { rotor: String, position: usize },

    /// Rotor assignment length differs from the number of slots.
    #[error("expected {expected} rotors, got {actual}")]
    SlotCountMismatch { expected: usize, actual: usize },

    /// Rotor id not present in the available pool.
    #[error("rotor {0} does not exist")]
    RotorNotFound(String),

    /// Same rotor name used twice, in the pool or in one assignment.
    #[error("rotor {0} used more than once")]
    DuplicateRotor(String),

    /// Number of moving rotors differs from the number of pawls.
    #[error("{pawls} pawls but {moving} moving rotors")]
    PawlMismatch { pawls: usize, moving: usize },

    /// Slot 0 must hold a reflector.
    #[error("first rotor must be a reflector, found {0}")]
    ReflectorRequired(String),

    /// Setting string length differs from `num_rotors - 1`.
    #[error("setting must have {expected} symbols, got {actual}")]
    SettingLength { expected: usize, actual: usize },

    /// Conversion requested before the machine received a setup line.
    #[error("machine not configured: {0}")]
    NotConfigured(String),
}

impl EnigmaError {
    /// Shorthand for [`EnigmaError::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Shorthand for [`EnigmaError::MalformedCycle`].
    pub fn malformed_cycle(msg: impl Into<String>) -> Self {
        Self::MalformedCycle(msg.into())
    }

    /// Shorthand for [`EnigmaError::Truncated`].
    pub fn truncated(msg: impl Into<String>) -> Self {
        Self::Truncated(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_symbol() {
        let err = EnigmaError::UnknownSymbol('?');
        assert_eq!(err.to_string(), "symbol '?' is not in the alphabet");
    }

    #[test]
    fn display_pawl_mismatch() {
        let err = EnigmaError::PawlMismatch { pawls: 3, moving: 2 };
        assert_eq!(err.to_string(), "3 pawls but 2 moving rotors");
    }

    #[test]
    fn helpers_build_expected_variants() {
        assert_eq!(
            EnigmaError::truncated("configuration"),
            EnigmaError::Truncated("configuration".to_string())
        );
        assert!(EnigmaError::invalid_config("x").to_string().contains("invalid configuration"));
    }
}
