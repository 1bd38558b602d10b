//! Key schedule and single-block encryption/decryption.

use crate::block::Block;
use crate::digest::sha256;
use crate::key::{MasterKey, RoundKeys, ROUNDS, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix, inv_permute, inv_substitute, mix, permute, substitute,
};

/// Expands a master key into 11 round keys.
///
/// Round key 0 is the master key itself; each following key is the first 16
/// bytes of `SHA-256(previous || i)` for `i` in `0..10`.
pub fn expand_key(key: &MasterKey) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    round_keys[0] = key.0;

    let mut input = [0u8; 17];
    for i in 0..ROUNDS {
        input[..16].copy_from_slice(&round_keys[i]);
        input[16] = i as u8;
        let digest = sha256(&input);
        round_keys[i + 1].copy_from_slice(&digest[..16]);
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..=ROUNDS {
        substitute(&mut state);
        permute(&mut state);
        mix(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    for round in (1..=ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix(&mut state);
        inv_permute(&mut state);
        inv_substitute(&mut state);
    }
    add_round_key(&mut state, round_keys.get(0));

    state
}
