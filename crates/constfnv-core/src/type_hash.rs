//! Per-type digests derived from the compiler-rendered type name.
//!
//! These hash the output of [`core::any::type_name`] through the FNV-1a
//! drivers, which makes them usable as compile-time tags distinguishing
//! distinct type instantiations.
//!
//! # Portability
//!
//! The rendering of `type_name` is explicitly unspecified: it can change
//! between compiler versions, and differs in path detail between builds. Two
//! calls with the same type argument within one compiled artifact always
//! agree, but the value must never be persisted, sent over the wire, or
//! compared across toolchain boundaries. This is an inherent property of
//! deriving the digest from a compiler-rendered string, not something this
//! crate can fix.

use crate::hash::{fnv1a_32, fnv1a_64};

/// Compute a 32-bit FNV-1a tag for the type `T`.
///
/// Stable within a single compiled artifact only; see the
/// [module docs](self#portability) for the portability caveat. Distinct
/// types yield distinct tags with overwhelming likelihood, but collisions
/// are not impossible.
#[inline]
pub const fn type_hash_32<T: ?Sized>() -> u32 {
    fnv1a_32(core::any::type_name::<T>())
}

/// Compute a 64-bit FNV-1a tag for the type `T`.
///
/// Same contract and caveats as [`type_hash_32`].
#[inline]
pub const fn type_hash_64<T: ?Sized>() -> u64 {
    fnv1a_64(core::any::type_name::<T>())
}
