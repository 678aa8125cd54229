//! Error types for mosaic and hex XOR decoding.

use thiserror::Error;

/// Broad failure classes of a decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character that is not valid where a digit was expected.
    MalformedDigit,
    /// A terminator, checksum or pad digit is missing, or input ended early.
    MalformedStructure,
    /// Declared and computed checksums differ.
    Integrity,
    /// Pad count is out of range or exceeds the decoded length.
    Padding,
    /// Characters follow the trailer.
    TrailingGarbage,
    /// Input ran out before a trailer was seen.
    Exhaustion,
}

/// Every way a decode can fail. None of them leave a partial result.
///
/// Positions are character indices into the ciphertext.
#[derive(Debug, Error, PartialEq)]
pub enum MosaicError {
    #[error("Invalid digit character {found:?} at position {position} (block {block})")]
    InvalidDigit {
        position: usize,
        found: char,
        block: usize,
    },

    #[error("Unexpected terminator at position {position} while expecting a digit (block {block})")]
    UnexpectedTerminator { position: usize, block: usize },

    #[error("Unexpected end of input while reading digits of block {block}")]
    UnexpectedEnd { block: usize },

    #[error("Missing block terminator after block {block}: found {found:?} at position {position}")]
    MissingTerminator {
        position: usize,
        found: Option<char>,
        block: usize,
    },

    #[error("Missing checksum character after block {block}")]
    MissingChecksum { block: usize },

    #[error("Invalid checksum character {found:?} at position {position}")]
    InvalidChecksumChar { position: usize, found: char },

    #[error("Checksum mismatch at position {position}: got {declared} expect {computed}")]
    ChecksumMismatch {
        position: usize,
        declared: u32,
        computed: u32,
    },

    #[error("Invalid trailer pad digit {found:?} at position {position}")]
    InvalidPadDigit { position: usize, found: char },

    #[error("Invalid pad count: {0}")]
    InvalidPadCount(u32),

    #[error("Pad mismatch: cannot trim {pad} bytes from {available} decoded bytes")]
    PadMismatch { pad: usize, available: usize },

    #[error("Incomplete trailer at position {position}: missing pad digit")]
    IncompleteTrailer { position: usize },

    #[error("Extra data after trailer: {remaining} characters from position {position}")]
    TrailingData { position: usize, remaining: usize },

    #[error("No trailer found; malformed input")]
    NoTrailer,

    #[error("Invalid hex ciphertext: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl MosaicError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MosaicError::InvalidDigit { .. }
            | MosaicError::UnexpectedTerminator { .. }
            | MosaicError::InvalidChecksumChar { .. }
            | MosaicError::InvalidPadDigit { .. }
            | MosaicError::InvalidHex(_) => ErrorKind::MalformedDigit,
            MosaicError::UnexpectedEnd { .. }
            | MosaicError::MissingTerminator { .. }
            | MosaicError::MissingChecksum { .. }
            | MosaicError::IncompleteTrailer { .. } => ErrorKind::MalformedStructure,
            MosaicError::ChecksumMismatch { .. } => ErrorKind::Integrity,
            MosaicError::InvalidPadCount(_) | MosaicError::PadMismatch { .. } => {
                ErrorKind::Padding
            }
            MosaicError::TrailingData { .. } => ErrorKind::TrailingGarbage,
            MosaicError::NoTrailer => ErrorKind::Exhaustion,
        }
    }
}

pub type Result<T> = std::result::Result<T, MosaicError>;
