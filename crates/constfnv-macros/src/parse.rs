//! Argument parsing for the literal hashing macros.

use proc_macro2::TokenStream;

/// Parse the argument of a narrow hashing macro into the bytes to fold.
pub fn narrow_literal(input: TokenStream) -> syn::Result<Vec<u8>> {
    match syn::parse2::<syn::Lit>(input)? {
        syn::Lit::Str(lit) => Ok(lit.value().into_bytes()),
        syn::Lit::ByteStr(lit) => Ok(lit.value()),
        other => Err(syn::Error::new(
            other.span(),
            "expected a string or byte-string literal",
        )),
    }
}

/// Parse the argument of a wide hashing macro into its UTF-16 units.
pub fn wide_literal(input: TokenStream) -> syn::Result<Vec<u16>> {
    let lit: syn::LitStr = syn::parse2(input)
        .map_err(|err| syn::Error::new(err.span(), "expected a string literal"))?;
    Ok(lit.value().encode_utf16().collect())
}
