//! Yildiz: a small 128-bit substitution-permutation block cipher.
//!
//! This crate provides:
//! - Key normalization (MD5) and a SHA-256 driven key schedule.
//! - Ten rounds of affine substitution, row rotation and additive mixing.
//! - ECB and CBC chaining with byte-count padding and a hex wire format.
//!
//! # Warning
//!
//! The construction is reproduced exactly, weaknesses included: the
//! substitution layer is linear modulo 256, the key and block are only 128
//! bits, and there are only ten rounds. ECB leaks repeated blocks. Do not
//! use it to protect real data.
//!
//! # Examples
//!
//! ```
//! use yildiz_core::{Mode, YildizCipher};
//!
//! let cipher = YildizCipher::new("TestKey123");
//! let ct = cipher.encrypt("Hello World", Mode::Ecb);
//! assert_eq!(ct, "712eca7007fad3aaf4c31b009db7e3a1");
//! assert_eq!(cipher.decrypt_text(&ct, Mode::Ecb).unwrap(), "Hello World");
//!
//! let ct = cipher.encrypt("Hello World", Mode::Cbc);
//! assert_eq!(ct.len(), 64);
//! assert_eq!(cipher.decrypt_text(&ct, Mode::Cbc).unwrap(), "Hello World");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod digest;
pub mod encoding;
mod error;
mod key;
pub mod mode;
pub mod padding;
pub mod round;
mod yildiz;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::{DecryptError, ParseModeError, Result};
pub use crate::key::{MasterKey, RoundKeys, ROUNDS, ROUND_KEY_COUNT};
pub use crate::mode::Mode;
pub use crate::yildiz::YildizCipher;
