//! Property-based tests for signature matching.
//!
//! Ensures matching is total on arbitrary input and that identification and
//! extension matching agree with each other.

use imgsig::{identify, identify_format, matches_extension, ImageFormat, Registry};
use proptest::prelude::*;

fn any_format() -> impl Strategy<Value = ImageFormat> {
    prop::sample::select(ImageFormat::all().to_vec())
}

/// A buffer carrying `format`'s signature followed by arbitrary bytes.
fn signed_buffer(format: ImageFormat, tail: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; Registry::builtin().required_len()];
    let tester = Registry::builtin()
        .testers()
        .iter()
        .find(|t| t.format == format)
        .expect("format is registered");
    for sig in tester.all_of.iter().chain(tester.any_of.first()) {
        buf[sig.offset..sig.end()].copy_from_slice(sig.bytes);
    }
    buf.extend_from_slice(tail);
    buf
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn identify_doesnt_panic(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = identify(&buf);
    }

    #[test]
    fn matches_extension_doesnt_panic(
        buf in prop::collection::vec(any::<u8>(), 0..64),
        ext in "\\PC{0,8}",
    ) {
        let _ = matches_extension(&buf, &ext);
    }

    #[test]
    fn identify_agrees_with_identify_format(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(identify(&buf), identify_format(&buf).map(|f| f.aliases()));
    }

    #[test]
    fn identified_aliases_always_match(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Some(aliases) = identify(&buf) {
            prop_assert!(!aliases.is_empty());
            for alias in aliases.iter() {
                prop_assert!(matches_extension(&buf, alias));
            }
        }
    }

    #[test]
    fn unidentified_buffers_match_no_extension(buf in prop::collection::vec(any::<u8>(), 0..64)) {
        if identify(&buf).is_none() {
            for format in ImageFormat::all() {
                for alias in format.aliases().iter() {
                    prop_assert!(!matches_extension(&buf, alias));
                }
            }
        }
    }

    #[test]
    fn short_buffers_match_nothing(buf in prop::collection::vec(any::<u8>(), 0..2)) {
        // Every signature in the registry is at least two bytes long
        prop_assert_eq!(identify(&buf), None);
    }

    #[test]
    fn signature_decides_regardless_of_tail(
        format in any_format(),
        tail in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let buf = signed_buffer(format, &tail);
        prop_assert_eq!(identify_format(&buf), Some(format));
        prop_assert!(matches_extension(&buf, format.canonical_extension()));
    }

    #[test]
    fn detection_is_deterministic(buf in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(identify(&buf), identify(&buf));
    }
}
