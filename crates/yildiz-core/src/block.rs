//! Fixed-size block state shared by every layer of the cipher.

/// Block length in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One 128-bit cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// XORs `rhs` into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a 16-byte chunk into an owned block.
///
/// Callers only pass chunks produced by `chunks_exact(BLOCK_SIZE)`.
#[inline]
pub(crate) fn load(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_with_self_clears_block() {
        let mut block: Block = std::array::from_fn(|i| i as u8 * 17);
        let copy = block;
        xor_in_place(&mut block, &copy);
        assert_eq!(block, [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn xor_is_its_own_inverse() {
        let original: Block = *b"sixteen byte blk";
        let mask: Block = [0xa5; BLOCK_SIZE];
        let mut block = original;
        xor_in_place(&mut block, &mask);
        assert_ne!(block, original);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }
}
