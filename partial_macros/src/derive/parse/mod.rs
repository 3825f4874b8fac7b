//! Attribute parsing for the `Tracked` derive macro.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, parse_quote};

mod input;
mod literals;

pub(crate) use input::{TrackedField, parse_input};
use literals::lit_str;

/// Struct-level attributes recognised by `#[derive(Tracked)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[partial(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `::partial::`.
    pub crate_path: Option<syn::Path>,
}

impl StructAttrs {
    /// Path the generated impl names the runtime crate by.
    pub(crate) fn runtime_path(&self) -> syn::Path {
        self.crate_path.clone().unwrap_or_else(|| parse_quote!(::partial))
    }
}

/// Field-level attributes recognised by `#[derive(Tracked)]`.
///
/// - `orm` records the raw ORM tag for column resolution.
/// - `relation` marks the field as an association.
/// - `skip` omits the field from the table.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub orm: Option<LitStr>,
    pub relation: bool,
    pub skip: bool,
}

/// Iterate all `#[partial(...)]` attributes once and apply a callback.
fn parse_partial<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("partial")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Parses struct-level `#[partial(...)]` attributes.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_partial(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let path = lit_str(meta, "crate")?.parse::<syn::Path>()?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(meta.error("unsupported partial attribute; expected `crate`"))
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[partial(...)]` attributes.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_partial(attrs, |meta| {
        if meta.path.is_ident("orm") {
            out.orm = Some(lit_str(meta, "orm")?);
        } else if meta.path.is_ident("relation") {
            out.relation = true;
        } else if meta.path.is_ident("skip") {
            out.skip = true;
        } else {
            return Err(meta.error(
                "unsupported partial attribute; expected `orm`, `relation` or `skip`",
            ));
        }
        Ok(())
    })?;
    Ok(out)
}
