//! Base64url transcoder properties

use jwtkit_codec::base64url::{decode_to_bytes, decode_to_utf8, encode_bytes, encode_utf8};
use proptest::prelude::*;

#[test]
fn test_known_vectors() {
    assert_eq!(encode_utf8(r#"{"alg":"HS256","typ":"JWT"}"#), "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    assert_eq!(encode_bytes(b""), "");
    assert_eq!(encode_bytes(b"f"), "Zg");
    assert_eq!(encode_bytes(b"fo"), "Zm8");
    assert_eq!(encode_bytes(b"foo"), "Zm9v");
    assert_eq!(decode_to_utf8("Zm9vYmFy").ok().as_deref(), Some("foobar"));
}

#[test]
fn test_non_ascii_text() {
    let text = "héllo wörld ✓";
    assert_eq!(decode_to_utf8(&encode_utf8(text)).ok().as_deref(), Some(text));
}

proptest! {
    #[test]
    fn prop_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_bytes(&bytes);
        prop_assert!(!encoded.contains(['+', '/', '=']));
        prop_assert_eq!(decode_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn prop_utf8_round_trip(text in ".*") {
        prop_assert_eq!(decode_to_utf8(&encode_utf8(&text)).unwrap(), text);
    }

    #[test]
    fn prop_length_one_mod_four_is_rejected(prefix in "[A-Za-z0-9_-]{0,20}") {
        let quad_aligned = &prefix[..prefix.len() - prefix.len() % 4];
        let input = format!("{quad_aligned}A");
        prop_assert!(decode_to_bytes(&input).is_err());
    }
}
