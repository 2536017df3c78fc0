//! # constfnv
//!
//! Compile-time FNV-1a hashing in two widths.
//!
//! FNV-1a digests of strings, byte slices, wide (UTF-16) strings, and C
//! strings, all computable in const contexts. Typical uses: match-style
//! dispatch on string identifiers, compile-time ID tagging, build-time
//! lookup tables.
//!
//! ```
//! use constfnv::fnv1a_32;
//!
//! const GAIN_ID: u32 = fnv1a_32("gain");
//! const CUTOFF_ID: u32 = fnv1a_32!("cutoff"); // macro form, same value
//!
//! fn dispatch(id: u32) -> &'static str {
//!     match id {
//!         GAIN_ID => "gain",
//!         CUTOFF_ID => "cutoff",
//!         _ => "unknown",
//!     }
//! }
//! # assert_eq!(dispatch(GAIN_ID), "gain");
//! ```
//!
//! FNV-1a is not cryptographically secure; collisions can be constructed
//! deliberately. Use it for identifiers you control, not adversarial input.
//!
//! # Type tags
//!
//! [`type_hash_32`] and [`type_hash_64`] derive a digest from the
//! compiler-rendered type name. The value is stable within one compiled
//! artifact but **not** across compiler versions or platforms, because the
//! rendering of [`core::any::type_name`] is unspecified. Never persist a
//! type tag or compare it across toolchain boundaries.

#![no_std]

// Re-export the hash core
pub use constfnv_core::{
    fnv1a_32, fnv1a_32_bytes, fnv1a_32_cstr, fnv1a_32_wide, fnv1a_64, fnv1a_64_bytes,
    fnv1a_64_cstr, fnv1a_64_wide, type_hash_32, type_hash_64, OFFSET_BASIS_32, OFFSET_BASIS_64,
    PRIME_32, PRIME_64,
};

// Re-export the literal hashing macros when the feature is enabled. The
// macros share names with the const fn drivers; the two live in separate
// namespaces, so `fnv1a_32("x")` and `fnv1a_32!("x")` both resolve.
#[cfg(feature = "macros")]
pub use constfnv_macros::{fnv1a_32, fnv1a_32_wide, fnv1a_64, fnv1a_64_wide};
