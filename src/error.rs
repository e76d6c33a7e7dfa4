//! Error types.

use core::num::NonZeroU32;

/// Error parsing an invalid string or byte representation of UUID.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input is not 36 characters long (or 16 bytes long for binary input).
    #[error("invalid length: found {0}")]
    InvalidLength(usize),

    /// A hyphen is missing at the given byte index of the 8-4-4-4-12 form.
    #[error("expected '-' at index {0}")]
    InvalidHyphen(usize),

    /// The byte at the given index is not a hexadecimal digit.
    #[error("invalid hexadecimal digit at index {0}")]
    InvalidDigit(usize),
}

/// Error returned when the version field holds a value outside 1 through 8.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum VersionError {
    /// The 4-bit version field is 0 or 9 through 15.
    #[error("undefined UUID version: {0}")]
    Undefined(u8),
}

/// Error returned by generators when an external source fails.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum GenerateError {
    /// The random number generator could not produce bytes. Carries the error code reported by
    /// the underlying source, if any.
    #[error("random number generator failed")]
    RandomSource(Option<NonZeroU32>),

    /// The system clock reads a time before the Unix epoch or past the representable range.
    #[error("system clock out of range")]
    Clock,
}
