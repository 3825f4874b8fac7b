//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a string literal from a `key = "value"` attribute entry.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[partial(orm = "column:id")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "orm")?;
///     assert_eq!(s.value(), "column:id");
///     Ok(())
/// }).unwrap();
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}
