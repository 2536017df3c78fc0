//! Const-evaluable FNV-1a hashing for byte and wide-character input.
//!
//! This crate provides the hash drivers shared between the `constfnv` facade
//! and the `constfnv-macros` proc-macro crate. Every entry point is a
//! `const fn`, so a digest of any compile-time-known input is itself a
//! compile-time constant:
//!
//! ```
//! use constfnv_core::fnv1a_32;
//!
//! const GAIN_ID: u32 = fnv1a_32("gain");
//! ```
//!
//! # Usage
//!
//! This crate is an implementation detail; use the `constfnv` facade crate
//! instead.
//!
//! # Contents
//!
//! - [`hash`] - FNV-1a drivers in both widths, over byte, wide-character,
//!   and C-string input
//! - [`type_hash`] - per-type digests derived from the compiler-rendered
//!   type name (not portable across toolchains, see the module docs)

#![no_std]
#![feature(const_type_name)]

pub mod hash;
pub mod type_hash;

pub use hash::{
    fnv1a_32, fnv1a_32_bytes, fnv1a_32_cstr, fnv1a_32_wide, fnv1a_64, fnv1a_64_bytes,
    fnv1a_64_cstr, fnv1a_64_wide, OFFSET_BASIS_32, OFFSET_BASIS_64, PRIME_32, PRIME_64,
};
pub use type_hash::{type_hash_32, type_hash_64};
