//! Expansion of `#[derive(Tracked)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod generate;
pub(crate) mod parse;

/// Expands the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (struct_attrs, fields) = parse::parse_input(input)?;
    let krate = struct_attrs.runtime_path();
    Ok(generate::tracked_impl(input, &krate, &fields))
}
