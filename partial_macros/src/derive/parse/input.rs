//! Input parsing for the `Tracked` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field paired with its parsed attributes.
pub(crate) struct TrackedField {
    pub ident: syn::Ident,
    pub attrs: FieldAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Skipped fields are dropped here so later stages only see fields that
/// belong in the table.
pub(crate) fn parse_input(
    input: &DeriveInput,
) -> Result<(StructAttrs, Vec<TrackedField>), syn::Error> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Tracked requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tracked can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Tracked requires named fields"));
        };
        fields.push(TrackedField { ident, attrs });
    }
    Ok((struct_attrs, fields))
}
