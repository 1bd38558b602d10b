//! Key material: the normalized master key and the expanded round keys.

use core::fmt;

use crate::block::Block;
use crate::digest::md5_128;

/// Number of cipher rounds.
pub const ROUNDS: usize = 10;

/// Number of round keys (one whitening key plus one per round).
pub const ROUND_KEY_COUNT: usize = ROUNDS + 1;

/// 128-bit master key derived from user key text.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MasterKey(pub [u8; 16]);

impl MasterKey {
    /// Normalizes key text of any length (including empty) to 16 bytes.
    pub fn from_text(key_text: &str) -> Self {
        Self(md5_128(key_text.as_bytes()))
    }
}

impl From<[u8; 16]> for MasterKey {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(..)")
    }
}

/// Expanded round keys, indexed `0..ROUND_KEY_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}
