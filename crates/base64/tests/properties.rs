//! Property-based tests for the codec laws.

use proptest::prelude::*;
use turbo_base64::{byte_length, decode, encode, encoded_len, get_lens, trim_padding};

proptest! {
    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..512), url_safe: bool) {
        let encoded = encode(&data, url_safe);
        prop_assert_eq!(decode(&encoded, false).unwrap(), data);
    }

    #[test]
    fn encoded_length_formula(data in proptest::collection::vec(any::<u8>(), 0..512), url_safe: bool) {
        let encoded = encode(&data, url_safe);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(encoded.len(), data.len().div_ceil(3) * 4);
    }

    #[test]
    fn byte_length_matches_decode_output(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, false);
        prop_assert_eq!(byte_length(&encoded).unwrap(), data.len());
        prop_assert_eq!(byte_length(&encoded).unwrap(), decode(&encoded, false).unwrap().len());
    }

    #[test]
    fn padding_cardinality(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, false);
        let (_, placeholder_len) = get_lens(&encoded).unwrap();
        let expected = match data.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        prop_assert_eq!(placeholder_len, expected);
    }

    #[test]
    fn trim_is_idempotent(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, false);
        let once = trim_padding(&encoded).to_owned();
        prop_assert_eq!(trim_padding(&once), once.as_str());
    }

    #[test]
    fn unpadded_text_decodes_identically(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, false);
        let trimmed = trim_padding(&encoded);
        prop_assert_eq!(decode(trimmed, false).unwrap(), data);
    }

    #[test]
    fn decode_never_panics(text in "\\PC{0,64}", remove_linebreaks: bool) {
        let _ = decode(&text, remove_linebreaks);
    }
}
