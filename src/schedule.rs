//! Block splitting and message schedule expansion (FIPS 180-4 §5.2.1, §6.2.2 step 1).

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use crate::constants::{BLOCK_LEN, ROUNDS};

/// Sixteen big-endian words decoded from one 64-byte block.
pub type BlockWords = [u32; 16];

/// Lazy, in-order iterator over the blocks of a padded message.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

/// Split a padded message into blocks of sixteen big-endian words.
///
/// `padded` must come from [`pad_message`](crate::padding::pad_message); any
/// trailing partial block would be a padding bug and is ignored in release
/// builds.
pub fn blocks(padded: &[u8]) -> Blocks<'_> {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "padded length not block aligned");
    Blocks {
        chunks: padded.chunks_exact(BLOCK_LEN),
    }
}

impl Iterator for Blocks<'_> {
    type Item = BlockWords;

    fn next(&mut self) -> Option<BlockWords> {
        self.chunks.next().map(decode_block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}
impl FusedIterator for Blocks<'_> {}

fn decode_block(block: &[u8]) -> BlockWords {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// The 64-word schedule `W[0..63]` for a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; ROUNDS],
}

impl MessageSchedule {
    /// Extend a block's sixteen words to the full schedule.
    pub fn expand(block: &BlockWords) -> Self {
        let mut w = [0u32; ROUNDS];
        w[..16].copy_from_slice(block);
        for t in 16..ROUNDS {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }
        Self { words: w }
    }

    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.words
    }
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
