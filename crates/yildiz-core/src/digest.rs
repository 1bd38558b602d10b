//! Thin adapters over the two hash primitives used by the key schedule.
//!
//! MD5 normalizes arbitrary key text to 128 bits; SHA-256 drives round-key
//! expansion. Neither is used anywhere else in the cipher.

use md5::Md5;
use sha2::{Digest, Sha256};

/// 128-bit MD5 digest of `data`.
pub fn md5_128(data: &[u8]) -> [u8; 16] {
    let digest = Md5::digest(data);
    let mut out = [0u8; 16];
    out.copy_from_slice(&digest);
    out
}

/// 256-bit SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
