//! Block chaining modes over already padded data.
//!
//! These functions work on raw bytes: padding and hex encoding are applied by
//! [`YildizCipher`](crate::YildizCipher). Encrypt inputs must be block-aligned;
//! decrypt inputs are length-checked and rejected before any block is touched.

use core::fmt;
use core::str::FromStr;

use crate::block::{load, xor_in_place, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{DecryptError, ParseModeError, Result};
use crate::key::RoundKeys;

/// Block chaining mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook: every block is encrypted independently.
    #[default]
    Ecb,
    /// Cipher block chaining with a random IV prepended to the output.
    Cbc,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => f.write_str("ECB"),
            Mode::Cbc => f.write_str("CBC"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ecb") {
            Ok(Mode::Ecb)
        } else if s.eq_ignore_ascii_case("cbc") {
            Ok(Mode::Cbc)
        } else {
            Err(ParseModeError(s.to_owned()))
        }
    }
}

/// Encrypts block-aligned data in ECB mode.
pub fn ecb_encrypt(padded: &[u8], round_keys: &RoundKeys) -> Vec<u8> {
    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    let mut out = Vec::with_capacity(padded.len());
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        out.extend_from_slice(&encrypt_block(&load(chunk), round_keys));
    }
    out
}

/// Decrypts ECB ciphertext, returning the still-padded plaintext.
///
/// # Errors
/// [`DecryptError::TruncatedCiphertext`] unless the input is a non-empty
/// multiple of the block size.
pub fn ecb_decrypt(ciphertext: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>> {
    check_blocks(ciphertext, 0)?;
    let mut out = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        out.extend_from_slice(&decrypt_block(&load(chunk), round_keys));
    }
    Ok(out)
}

/// Encrypts block-aligned data in CBC mode, prefixing the output with `iv`.
pub fn cbc_encrypt(padded: &[u8], round_keys: &RoundKeys, iv: &Block) -> Vec<u8> {
    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    let mut out = Vec::with_capacity(BLOCK_SIZE + padded.len());
    out.extend_from_slice(iv);

    let mut previous = *iv;
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = load(chunk);
        xor_in_place(&mut block, &previous);
        previous = encrypt_block(&block, round_keys);
        out.extend_from_slice(&previous);
    }
    out
}

/// Decrypts IV-prefixed CBC ciphertext, returning the still-padded plaintext.
///
/// # Errors
/// [`DecryptError::TruncatedCiphertext`] unless the input holds the IV plus
/// at least one whole block.
pub fn cbc_decrypt(ciphertext: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>> {
    check_blocks(ciphertext, BLOCK_SIZE)?;
    let (iv, body) = ciphertext.split_at(BLOCK_SIZE);

    let mut out = Vec::with_capacity(body.len());
    let mut previous = load(iv);
    for chunk in body.chunks_exact(BLOCK_SIZE) {
        let block = load(chunk);
        let mut plain = decrypt_block(&block, round_keys);
        xor_in_place(&mut plain, &previous);
        out.extend_from_slice(&plain);
        previous = block;
    }
    Ok(out)
}

fn check_blocks(ciphertext: &[u8], prefix: usize) -> Result<()> {
    let len = ciphertext.len();
    if len < prefix + BLOCK_SIZE || len % BLOCK_SIZE != 0 {
        return Err(DecryptError::TruncatedCiphertext { len });
    }
    Ok(())
}
