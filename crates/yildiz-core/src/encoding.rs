//! Hex wire format for ciphertexts.

use crate::error::Result;

/// Encodes bytes as lowercase hex, two characters per byte.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string.
///
/// # Errors
/// Returns [`DecryptError::MalformedHex`](crate::DecryptError::MalformedHex)
/// on odd length or a non-hex character.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}
