//! FIPS 180-4 SHA-256 over whole messages, rendered as lowercase hex.
//!
//! The pipeline is padding, block scheduling, compression, then formatting:
//!
//! ```
//! assert_eq!(
//!     sha256_hex::hash_str("abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! Text is hashed as UTF-8 unless another [`TextEncoding`] is requested:
//!
//! ```
//! use sha256_hex::{hash, Message, TextEncoding};
//!
//! let latin1 = hash(Message::text("café", TextEncoding::Latin1)).unwrap();
//! assert_eq!(latin1, sha256_hex::hash_bytes(b"caf\xe9"));
//! assert!(hash(Message::text("café", TextEncoding::Ascii)).is_err());
//! ```

pub mod compress;
pub mod constants;
pub mod digest;
pub mod encoding;
pub mod padding;
pub mod schedule;

pub use crate::compress::HashState;
pub use crate::digest::{Digest, ParseDigestError};
pub use crate::encoding::{EncodingError, TextEncoding, UnknownEncoding};

use crate::padding::pad_message;
use crate::schedule::blocks;

/// Input to [`hash`]: raw bytes, or text plus the encoding to apply first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    Bytes(&'a [u8]),
    Text {
        text: &'a str,
        encoding: TextEncoding,
    },
}

impl<'a> Message<'a> {
    pub fn text(text: &'a str, encoding: TextEncoding) -> Self {
        Message::Text { text, encoding }
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Message::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Message::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Message::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::text(text, TextEncoding::Utf8)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::text(text, TextEncoding::Utf8)
    }
}

/// Hash a message and return its digest as 64 lowercase hex characters.
///
/// Fails only when text cannot be represented in its requested encoding.
pub fn hash<'a>(message: impl Into<Message<'a>>) -> Result<String, EncodingError> {
    let digest = match message.into() {
        Message::Bytes(bytes) => digest(bytes),
        Message::Text { text, encoding } => digest(&encoding.encode(text)?),
    };
    Ok(digest.to_hex())
}

pub fn hash_bytes(message: &[u8]) -> String {
    digest(message).to_hex()
}

/// Hash `text` encoded as UTF-8.
pub fn hash_str(text: &str) -> String {
    digest(text.as_bytes()).to_hex()
}

/// Compute the raw digest of `message`.
///
/// Every call starts from a fresh initial state.
pub fn digest(message: &[u8]) -> Digest {
    let padded = pad_message(message);
    let mut state = HashState::new();
    for block in blocks(&padded) {
        state.absorb(&block);
    }
    state.finalize()
}
