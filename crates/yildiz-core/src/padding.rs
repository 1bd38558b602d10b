//! Byte-count (PKCS#7-style) padding to the block size.

use crate::block::BLOCK_SIZE;
use crate::error::{DecryptError, Result};

/// Pads `data` to a positive multiple of the block size.
///
/// Always appends between 1 and 16 bytes, each equal to the pad length; input
/// that is already block-aligned (including empty input) gains a full block.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strips padding added by [`pad`].
///
/// # Errors
/// Returns [`DecryptError::InvalidPadding`] if `data` is empty, the last byte
/// is `0` or greater than 16, or any of the trailing pad bytes disagree.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let &last = data.last().ok_or(DecryptError::InvalidPadding)?;
    let pad_len = last as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(DecryptError::InvalidPadding);
    }
    let (body, tail) = data.split_at(data.len() - pad_len);
    if tail.iter().any(|&b| b != last) {
        return Err(DecryptError::InvalidPadding);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gets_full_block() {
        assert_eq!(pad(b""), vec![16u8; 16]);
    }

    #[test]
    fn aligned_input_gets_extra_block() {
        let data = [0xabu8; 32];
        let padded = pad(&data);
        assert_eq!(padded.len(), 48);
        assert_eq!(&padded[32..], &[16u8; 16]);
    }

    #[test]
    fn partial_block_is_filled() {
        let padded = pad(b"Hello World");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[11..], &[5u8; 5]);
        assert_eq!(unpad(&padded).unwrap(), b"Hello World");
    }

    #[test]
    fn round_trip_all_short_lengths() {
        for len in 0..=48 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert!(padded.len() > data.len());
            assert_eq!(unpad(&padded).unwrap(), &data[..]);
        }
    }

    #[test]
    fn rejects_zero_pad_byte() {
        let mut block = [1u8; 16];
        block[15] = 0;
        assert!(matches!(unpad(&block), Err(DecryptError::InvalidPadding)));
    }

    #[test]
    fn rejects_pad_byte_above_block_size() {
        let block = [17u8; 32];
        assert!(matches!(unpad(&block), Err(DecryptError::InvalidPadding)));
    }

    #[test]
    fn rejects_inconsistent_tail() {
        let mut block = [4u8; 16];
        block[13] = 3;
        assert!(matches!(unpad(&block), Err(DecryptError::InvalidPadding)));
    }

    #[test]
    fn rejects_empty_buffer() {
        assert!(matches!(unpad(&[]), Err(DecryptError::InvalidPadding)));
    }
}
