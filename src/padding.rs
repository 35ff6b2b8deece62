//! Message preprocessing: the FIPS 180-4 §5.1.1 padding rule.

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Marker byte appended directly after the message (a single `1` bit).
const END_MARKER: u8 = 0x80;

/// Length in bytes of the padded form of a `message_len`-byte message.
///
/// Always a positive multiple of [`BLOCK_LEN`] with room for the marker byte
/// and the length field.
pub fn padded_len(message_len: usize) -> usize {
    let minimum = message_len + 1 + LENGTH_FIELD_LEN;
    minimum.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Pad `message` to a whole number of blocks.
///
/// Layout: `message ++ 0x80 ++ zeros ++ be64(8 * len)`. The bit length wraps
/// modulo 2^64 for messages of 2^64 bits or more.
pub fn pad_message(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());
    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(END_MARKER);
    padded.resize(total - LENGTH_FIELD_LEN, 0);
    padded.extend_from_slice(&bit_length(message.len()).to_be_bytes());
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}

fn bit_length(message_len: usize) -> u64 {
    (message_len as u64).wrapping_mul(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks_for(len: usize) -> usize {
        pad_message(&vec![0x61; len]).len() / BLOCK_LEN
    }

    #[test]
    fn empty_message_is_one_block() {
        let padded = pad_message(b"");
        assert_eq!(padded.len(), BLOCK_LEN);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn abc_layout() {
        let padded = pad_message(b"abc");
        assert_eq!(&padded[..4], &[0x61, 0x62, 0x63, 0x80]);
        assert!(padded[4..56].iter().all(|byte| *byte == 0));
        assert_eq!(&padded[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn boundary_lengths_pick_block_count() {
        assert_eq!(blocks_for(55), 1);
        assert_eq!(blocks_for(56), 2);
        assert_eq!(blocks_for(63), 2);
        assert_eq!(blocks_for(64), 2);
        assert_eq!(blocks_for(119), 2);
        assert_eq!(blocks_for(120), 3);
    }

    #[test]
    fn fifty_six_bytes_spill_into_second_block() {
        let padded = pad_message(&[0xff; 56]);
        assert_eq!(padded[56], 0x80);
        assert!(padded[57..120].iter().all(|byte| *byte == 0));
        assert_eq!(&padded[120..], &448u64.to_be_bytes());
    }

    #[test]
    fn padded_len_agrees_with_pad_message() {
        for len in 0..200 {
            assert_eq!(padded_len(len), pad_message(&vec![0; len]).len(), "len {len}");
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn bit_length_wraps_instead_of_failing() {
        assert_eq!(bit_length(3), 24);
        assert_eq!(bit_length(1usize << 61), 0);
        assert_eq!(bit_length((1usize << 61) + 1), 8);
    }
}
