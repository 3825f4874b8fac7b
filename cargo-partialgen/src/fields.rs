//! Field extraction for marked structs.

use syn::ext::IdentExt;
use syn::{Fields, Ident};

use crate::discover::Target;
use crate::error::GenerateError;
use crate::type_name::type_name;

/// A named field and its type as source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StructField {
    pub(crate) ident: Ident,
    pub(crate) ty: String,
}

impl StructField {
    /// Field name without any raw-identifier prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    fn is_string_named(&self, name: &str) -> bool {
        self.ty == "String" && self.name() == name
    }
}

/// Named fields of `target` in declaration order.
///
/// Tuple and unit structs yield no fields.
pub(crate) fn fields_of(target: &Target) -> Result<Vec<StructField>, GenerateError> {
    let Fields::Named(named) = &target.item.fields else {
        return Ok(Vec::new());
    };
    named
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
        .map(|(ident, ty)| {
            let ty = type_name(ty).map_err(|source| GenerateError::UnsupportedType {
                type_name: target.item.ident.to_string(),
                field: ident.unraw().to_string(),
                path: target.path.clone(),
                source,
            })?;
            Ok(StructField {
                ident: ident.clone(),
                ty,
            })
        })
        .collect()
}

/// Whether a conventional `id: String` field exists.
pub(crate) fn has_id(fields: &[StructField]) -> bool {
    fields.iter().any(|field| field.is_string_named("id"))
}

/// Whether a conventional `organisation_id: String` field exists.
pub(crate) fn has_organisation_id(fields: &[StructField]) -> bool {
    fields.iter().any(|field| field.is_string_named("organisation_id"))
}
