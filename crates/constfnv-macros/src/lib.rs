//! Literal hashing macros for the `constfnv` library.
//!
//! Rust has no user-defined literal suffixes, so the convenience forms for
//! hashing a literal directly are function-like macros. Each one parses its
//! argument, computes the digest at macro expansion time with the
//! `constfnv-core` drivers, and expands to a plain integer literal:
//!
//! ```ignore
//! use constfnv::{fnv1a_32, fnv1a_64_wide};
//!
//! const GAIN_ID: u32 = fnv1a_32!("gain");
//! const WIDE_TAG: u64 = fnv1a_64_wide!("gain");
//! ```
//!
//! The narrow forms accept string and byte-string literals; the wide forms
//! accept string literals and hash their UTF-16 encoding. Anything else is a
//! compile error naming the expected literal kind.

use proc_macro::TokenStream;
use quote::quote;

mod parse;

/// Expand to the 32-bit FNV-1a hash of a string or byte-string literal.
#[proc_macro]
pub fn fnv1a_32(input: TokenStream) -> TokenStream {
    match parse::narrow_literal(input.into()) {
        Ok(bytes) => {
            let value = constfnv_core::fnv1a_32_bytes(&bytes);
            quote! { #value }.into()
        }
        Err(err) => err.to_compile_error().into(),
    }
}

/// Expand to the 64-bit FNV-1a hash of a string or byte-string literal.
#[proc_macro]
pub fn fnv1a_64(input: TokenStream) -> TokenStream {
    match parse::narrow_literal(input.into()) {
        Ok(bytes) => {
            let value = constfnv_core::fnv1a_64_bytes(&bytes);
            quote! { #value }.into()
        }
        Err(err) => err.to_compile_error().into(),
    }
}

/// Expand to the 32-bit FNV-1a hash of a string literal's UTF-16 encoding.
#[proc_macro]
pub fn fnv1a_32_wide(input: TokenStream) -> TokenStream {
    match parse::wide_literal(input.into()) {
        Ok(units) => {
            let value = constfnv_core::fnv1a_32_wide(&units);
            quote! { #value }.into()
        }
        Err(err) => err.to_compile_error().into(),
    }
}

/// Expand to the 64-bit FNV-1a hash of a string literal's UTF-16 encoding.
#[proc_macro]
pub fn fnv1a_64_wide(input: TokenStream) -> TokenStream {
    match parse::wide_literal(input.into()) {
        Ok(units) => {
            let value = constfnv_core::fnv1a_64_wide(&units);
            quote! { #value }.into()
        }
        Err(err) => err.to_compile_error().into(),
    }
}
