use sha2::{Digest as _, Sha256};
use sha256_hex::{digest, hash, hash_bytes, hash_str, Message, TextEncoding};

fn reference_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

fn is_lower_hex_64(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Deterministic filler so boundary inputs are not all one repeated byte.
fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

#[test]
fn fips_empty_message() {
    assert_eq!(
        hash_str(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn fips_abc() {
    assert_eq!(
        hash_str("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn fips_two_block_448_bit_message() {
    let message = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(message.len(), 56);
    assert_eq!(
        hash_str(message),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn fips_896_bit_message() {
    let message = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    assert_eq!(message.len(), 112);
    assert_eq!(
        hash_str(message),
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1"
    );
}

#[test]
fn fips_one_million_a() {
    let message = vec![b'a'; 1_000_000];
    assert_eq!(
        hash_bytes(&message),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn quick_brown_fox() {
    assert_eq!(
        hash_str("The quick brown fox jumps over the lazy dog"),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

#[test]
fn padding_boundaries_match_reference() {
    for len in [0, 1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1000] {
        let message = patterned(len);
        assert_eq!(hash_bytes(&message), reference_hex(&message), "len {len}");
    }
}

#[test]
fn every_length_up_to_three_blocks_matches_reference() {
    for len in 0..=192 {
        let message = patterned(len);
        assert_eq!(digest(&message).as_bytes()[..], Sha256::digest(&message)[..], "len {len}");
    }
}

#[test]
fn output_is_64_lowercase_hex_and_deterministic() {
    for len in [0, 3, 64, 500] {
        let message = patterned(len);
        let first = hash_bytes(&message);
        assert!(is_lower_hex_64(&first), "{first}");
        assert_eq!(first, hash_bytes(&message));
    }
}

#[test]
fn single_bit_flip_changes_digest() {
    let message = patterned(100);
    let original = hash_bytes(&message);
    for (byte, bit) in [(0, 0), (50, 3), (99, 7)] {
        let mut flipped = message.clone();
        flipped[byte] ^= 1 << bit;
        assert_ne!(hash_bytes(&flipped), original, "byte {byte} bit {bit}");
    }
}

#[test]
fn text_encodings_hash_their_bytes() {
    let text = "Grüße";
    assert_eq!(
        hash(text).expect("utf-8"),
        reference_hex(text.as_bytes())
    );
    assert_eq!(
        hash(Message::text(text, TextEncoding::Latin1)).expect("latin-1"),
        reference_hex(b"Gr\xfc\xdfe")
    );
    assert!(hash(Message::text(text, TextEncoding::Ascii)).is_err());
}

#[test]
fn hashing_is_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || hash_bytes(&patterned(i * 70))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let hex = handle.join().expect("hash thread");
        assert_eq!(hex, reference_hex(&patterned(i * 70)));
    }
}
