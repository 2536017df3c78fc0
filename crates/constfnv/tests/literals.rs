//! Integration tests for the literal hashing macros.
//!
//! The macros expand in a separate crate from the one defining them, so they
//! are exercised here rather than in `constfnv-macros` itself. Every macro
//! must agree with the const fn driver folding the same units.

use constfnv::{
    fnv1a_32, fnv1a_32_bytes, fnv1a_32_wide, fnv1a_64, fnv1a_64_bytes, fnv1a_64_wide,
};

#[test]
fn test_narrow_macros_match_drivers() {
    assert_eq!(fnv1a_32!("foobar"), fnv1a_32("foobar"));
    assert_eq!(fnv1a_64!("foobar"), fnv1a_64("foobar"));
    assert_eq!(fnv1a_32!(""), fnv1a_32(""));
    assert_eq!(fnv1a_64!(""), fnv1a_64(""));
}

#[test]
fn test_narrow_macros_accept_byte_strings() {
    assert_eq!(fnv1a_32!(b"\x00\xff"), fnv1a_32_bytes(&[0x00, 0xff]));
    assert_eq!(fnv1a_64!(b"foobar"), fnv1a_64_bytes(b"foobar"));
}

#[test]
fn test_wide_macros_match_drivers() {
    let units: Vec<u16> = "foobar".encode_utf16().collect();
    assert_eq!(fnv1a_32_wide!("foobar"), fnv1a_32_wide(&units));
    assert_eq!(fnv1a_64_wide!("foobar"), fnv1a_64_wide(&units));
}

#[test]
fn test_wide_macros_handle_non_ascii() {
    // U+00E9 is one UTF-16 unit but two UTF-8 bytes.
    let units: Vec<u16> = "café".encode_utf16().collect();
    assert_eq!(fnv1a_32_wide!("café"), fnv1a_32_wide(&units));
    assert_ne!(fnv1a_32_wide!("café"), fnv1a_32!("café"));
}

#[test]
fn test_known_vectors_via_macros() {
    assert_eq!(fnv1a_32!("foobar"), 0xbf9cf968);
    assert_eq!(fnv1a_64!("foobar"), 0x85944171f73967e8);
}

#[test]
fn test_macro_output_in_const_context() {
    const GAIN_ID: u32 = fnv1a_32!("gain");
    const GAIN_TAG: u64 = fnv1a_64_wide!("gain");

    // The expansion is a plain literal, so it works anywhere a constant does.
    fn dispatch(id: u32) -> bool {
        match id {
            GAIN_ID => true,
            _ => false,
        }
    }
    assert!(dispatch(fnv1a_32("gain")));
    assert_ne!(GAIN_TAG, 0);
}
