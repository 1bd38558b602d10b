//! Round layers. Each one is a bijection on a 16-byte block.

use crate::block::{xor_in_place, Block, BLOCK_SIZE};

const SUB_MUL: u8 = 3;
const SUB_ADD: u8 = 7;
/// Multiplicative inverse of `SUB_MUL` modulo 256 (`3 * 171 = 513 = 2 * 256 + 1`).
const SUB_MUL_INV: u8 = 171;

/// Affine byte substitution `y = 3x + 7 (mod 256)`.
#[inline]
pub fn substitute(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = byte.wrapping_mul(SUB_MUL).wrapping_add(SUB_ADD);
    }
}

/// Inverse substitution `x = 171 (y - 7) (mod 256)`.
#[inline]
pub fn inv_substitute(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = byte.wrapping_sub(SUB_ADD).wrapping_mul(SUB_MUL_INV);
    }
}

/// Treats the block as a row-major 4x4 matrix and rotates row `r` left by `r`.
#[inline]
pub fn permute(state: &mut Block) {
    let mut tmp = [0u8; BLOCK_SIZE];
    for row in 0..4 {
        for col in 0..4 {
            tmp[row * 4 + col] = state[row * 4 + (col + row) % 4];
        }
    }
    *state = tmp;
}

/// Rotates row `r` right by `r`, undoing [`permute`].
#[inline]
pub fn inv_permute(state: &mut Block) {
    let mut tmp = [0u8; BLOCK_SIZE];
    for row in 0..4 {
        for col in 0..4 {
            tmp[row * 4 + (col + row) % 4] = state[row * 4 + col];
        }
    }
    *state = tmp;
}

/// Diffusion layer.
///
/// Adds each byte's right neighbour to it from left to right, then folds the
/// freshly mixed byte 0 back into byte 15. Byte `i + 1` is still unmixed when
/// byte `i` reads it.
#[inline]
pub fn mix(state: &mut Block) {
    for i in 0..BLOCK_SIZE - 1 {
        state[i] = state[i].wrapping_add(state[i + 1]);
    }
    state[BLOCK_SIZE - 1] = state[BLOCK_SIZE - 1].wrapping_add(state[0]);
}

/// Undoes [`mix`]: the wrap step first, then right to left so byte `i + 1`
/// is already restored when byte `i` subtracts it.
#[inline]
pub fn inv_mix(state: &mut Block) {
    state[BLOCK_SIZE - 1] = state[BLOCK_SIZE - 1].wrapping_sub(state[0]);
    for i in (0..BLOCK_SIZE - 1).rev() {
        state[i] = state[i].wrapping_sub(state[i + 1]);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
