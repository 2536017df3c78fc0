//! FNV-1a hash drivers.
//!
//! FNV-1a (Fowler-Noll-Vo) is a non-cryptographic hash: starting from a
//! per-width offset basis, each octet is XORed into the running hash, which
//! is then multiplied by a per-width prime with wrapping arithmetic. It is
//! fast, deterministic across platforms, and simple enough to evaluate in
//! const contexts, which is the whole point of this crate. It is **not**
//! collision-resistant against an adversary; do not use it where a
//! cryptographic hash is called for.
//!
//! Both widths share a single fold body, instantiated per width by the
//! `fnv1a_width!` macro below. The byte-slice drivers are the primitive
//! shape; the `&str`, wide, and C-string drivers reduce to them.

/// FNV prime for the 32-bit width.
pub const PRIME_32: u32 = 16_777_619;
/// FNV offset basis for the 32-bit width.
pub const OFFSET_BASIS_32: u32 = 2_166_136_261;

/// FNV prime for the 64-bit width.
pub const PRIME_64: u64 = 1_099_511_628_211;
/// FNV offset basis for the 64-bit width.
pub const OFFSET_BASIS_64: u64 = 14_695_981_039_346_656_037;

macro_rules! fnv1a_width {
    (
        $ty:ty, $width:literal, $prime:ident, $offset:ident,
        $str_fn:ident, $bytes_fn:ident, $wide_fn:ident, $cstr_fn:ident
    ) => {
        #[doc = concat!("Compute the FNV-1a ", $width, "-bit hash of a byte slice.")]
        ///
        /// Every byte of the slice is folded; an empty slice hashes to the
        /// offset basis. Usable in const contexts whenever the input is a
        /// compile-time constant.
        #[inline]
        pub const fn $bytes_fn(input: &[u8]) -> $ty {
            let mut hash: $ty = $offset;
            let mut i = 0;
            while i < input.len() {
                hash ^= input[i] as $ty;
                hash = hash.wrapping_mul($prime);
                i += 1;
            }
            hash
        }

        #[doc = concat!("Compute the FNV-1a ", $width, "-bit hash of a string's UTF-8 bytes.")]
        ///
        /// Equivalent to calling the byte-slice driver on `input.as_bytes()`.
        #[inline]
        pub const fn $str_fn(input: &str) -> $ty {
            $bytes_fn(input.as_bytes())
        }

        #[doc = concat!("Compute the FNV-1a ", $width, "-bit hash of a wide (UTF-16) string.")]
        ///
        /// Each 16-bit unit is folded as its two little-endian octets, low
        /// byte first. This keeps the fold octet-oriented and means the wide
        /// hash of an ASCII string is *not* equal to the hash of its narrow
        /// encoding (the high zero byte of every unit is folded too).
        #[inline]
        pub const fn $wide_fn(input: &[u16]) -> $ty {
            let mut hash: $ty = $offset;
            let mut i = 0;
            while i < input.len() {
                let [lo, hi] = input[i].to_le_bytes();
                hash ^= lo as $ty;
                hash = hash.wrapping_mul($prime);
                hash ^= hi as $ty;
                hash = hash.wrapping_mul($prime);
                i += 1;
            }
            hash
        }

        #[doc = concat!("Compute the FNV-1a ", $width, "-bit hash of a C string.")]
        ///
        /// Hashes every byte up to but excluding the trailing NUL, so
        #[doc = concat!("`", stringify!($cstr_fn), r#"(c"gain")` equals `"#, stringify!($str_fn), r#"("gain")`."#)]
        #[inline]
        pub const fn $cstr_fn(input: &core::ffi::CStr) -> $ty {
            $bytes_fn(input.to_bytes())
        }
    };
}

fnv1a_width!(
    u32, 32, PRIME_32, OFFSET_BASIS_32,
    fnv1a_32, fnv1a_32_bytes, fnv1a_32_wide, fnv1a_32_cstr
);
fnv1a_width!(
    u64, 64, PRIME_64, OFFSET_BASIS_64,
    fnv1a_64, fnv1a_64_bytes, fnv1a_64_wide, fnv1a_64_cstr
);
