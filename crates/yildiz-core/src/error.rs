//! Error types returned by decryption and mode parsing.

use thiserror::Error;

/// Failures that can occur while decrypting a ciphertext.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The decrypted buffer does not end in a valid padding run.
    #[error("invalid padding")]
    InvalidPadding,

    /// The ciphertext is not valid even-length hexadecimal.
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// The ciphertext does not hold a whole number of blocks (plus the IV under CBC).
    #[error("truncated ciphertext: {len} bytes is not a valid ciphertext length")]
    TruncatedCiphertext {
        /// Decoded ciphertext length in bytes.
        len: usize,
    },

    /// The recovered plaintext is not valid UTF-8.
    #[error("plaintext is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result alias for decryption operations.
pub type Result<T> = std::result::Result<T, DecryptError>;

/// Unrecognized block mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected ECB or CBC)")]
pub struct ParseModeError(pub String);
