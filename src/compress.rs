//! The SHA-256 compression function and running hash state (FIPS 180-4 §6.2.2).

use crate::constants::{H_INIT, K};
use crate::digest::Digest;
use crate::schedule::{BlockWords, MessageSchedule};

/// Running hash state `H0..H7`.
///
/// Starts at [`H_INIT`] and absorbs blocks strictly in order; each block
/// updates every word exactly once, after its 64 rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashState {
    h: [u32; 8],
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    pub fn new() -> Self {
        Self { h: H_INIT }
    }

    /// Expand one block and fold it into the state.
    pub fn absorb(&mut self, block: &BlockWords) {
        self.compress(&MessageSchedule::expand(block));
    }

    /// Run the 64 rounds over `schedule`, then feed the result forward.
    pub fn compress(&mut self, schedule: &MessageSchedule) {
        let mut v = Working::from_state(&self.h);
        for (k, w) in K.iter().zip(schedule.words()) {
            v.round(*k, *w);
        }
        for (word, var) in self.h.iter_mut().zip(v.into_array()) {
            *word = word.wrapping_add(var);
        }
    }

    pub fn words(&self) -> [u32; 8] {
        self.h
    }

    pub fn finalize(self) -> Digest {
        Digest::from_words(self.h)
    }
}

/// Working variables `a..h` for one block.
struct Working {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    e: u32,
    f: u32,
    g: u32,
    h: u32,
}

impl Working {
    fn from_state(state: &[u32; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = *state;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    #[inline]
    fn round(&mut self, k: u32, w: u32) {
        let temp1 = self
            .h
            .wrapping_add(big_sigma1(self.e))
            .wrapping_add(ch(self.e, self.f, self.g))
            .wrapping_add(k)
            .wrapping_add(w);
        let temp2 = big_sigma0(self.a).wrapping_add(maj(self.a, self.b, self.c));
        self.h = self.g;
        self.g = self.f;
        self.f = self.e;
        self.e = self.d.wrapping_add(temp1);
        self.d = self.c;
        self.c = self.b;
        self.b = self.a;
        self.a = temp1.wrapping_add(temp2);
    }

    fn into_array(self) -> [u32; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}
