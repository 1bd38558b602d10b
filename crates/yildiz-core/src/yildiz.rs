//! High-level cipher: padding, chaining and hex encoding around the block core.

use core::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::expand_key;
use crate::encoding;
use crate::error::Result;
use crate::key::{MasterKey, RoundKeys};
use crate::mode::{cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt, Mode};
use crate::padding::{pad, unpad};

/// Yildiz cipher bound to one key.
///
/// The round keys are derived once in [`YildizCipher::new`] and never change,
/// so a shared reference can be used from several threads at once.
#[derive(Clone)]
pub struct YildizCipher {
    round_keys: RoundKeys,
}

impl YildizCipher {
    /// Derives the round keys from `key_text`. Any string, including the
    /// empty string, is accepted.
    pub fn new(key_text: &str) -> Self {
        Self::from_master_key(&MasterKey::from_text(key_text))
    }

    /// Builds a cipher from an already normalized master key.
    pub fn from_master_key(key: &MasterKey) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts `plaintext` and returns lowercase hex.
    ///
    /// CBC IVs come from the operating system's CSPRNG.
    pub fn encrypt(&self, plaintext: impl AsRef<[u8]>, mode: Mode) -> String {
        self.encrypt_with_rng(plaintext, mode, &mut OsRng)
    }

    /// Encrypts `plaintext`, drawing the CBC IV from `rng`. ECB ignores `rng`.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: impl AsRef<[u8]>,
        mode: Mode,
        rng: &mut R,
    ) -> String {
        let padded = pad(plaintext.as_ref());
        let bytes = match mode {
            Mode::Ecb => ecb_encrypt(&padded, &self.round_keys),
            Mode::Cbc => {
                let mut iv: Block = [0u8; BLOCK_SIZE];
                rng.fill_bytes(&mut iv);
                cbc_encrypt(&padded, &self.round_keys, &iv)
            }
        };
        encoding::encode(&bytes)
    }

    /// Decrypts a hex ciphertext to raw plaintext bytes.
    ///
    /// # Errors
    /// `MalformedHex`, `TruncatedCiphertext` or `InvalidPadding`; no partial
    /// plaintext is ever returned.
    pub fn decrypt(&self, ciphertext_hex: &str, mode: Mode) -> Result<Vec<u8>> {
        let ciphertext = encoding::decode(ciphertext_hex)?;
        let padded = match mode {
            Mode::Ecb => ecb_decrypt(&ciphertext, &self.round_keys)?,
            Mode::Cbc => cbc_decrypt(&ciphertext, &self.round_keys)?,
        };
        Ok(unpad(&padded)?.to_vec())
    }

    /// Decrypts a hex ciphertext whose plaintext is UTF-8 text.
    ///
    /// # Errors
    /// Everything [`decrypt`](Self::decrypt) reports, plus `Encoding` when the
    /// plaintext is not valid UTF-8.
    pub fn decrypt_text(&self, ciphertext_hex: &str, mode: Mode) -> Result<String> {
        Ok(String::from_utf8(self.decrypt(ciphertext_hex, mode)?)?)
    }
}

impl fmt::Debug for YildizCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YildizCipher").finish_non_exhaustive()
    }
}
