//! Rendering of generated files.
//!
//! Items are assembled with `quote!`, parsed into a single `syn::File` per
//! output and printed with `prettyplease`, so output is stable across runs.

mod builder;
mod matcher;

use camino::Utf8Path;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type, Visibility};

use crate::discover::Target;
use crate::error::GenerateError;
use crate::fields::{StructField, fields_of, has_id, has_organisation_id};
use crate::marker::Kind;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by cargo-partialgen, DO NOT EDIT.";

/// A marked struct prepared for rendering.
struct Model<'a> {
    ident: &'a Ident,
    vis: &'a Visibility,
    fields: Vec<ModelField>,
    has_id: bool,
    has_organisation_id: bool,
}

struct ModelField {
    ident: Ident,
    name: String,
    ty: Type,
}

impl ModelField {
    fn predicate_ident(&self) -> Ident {
        format_ident!("match_{}", self.name)
    }
}

impl<'a> Model<'a> {
    fn new(target: &'a Target, output: &Utf8Path) -> Result<Self, GenerateError> {
        let fields = fields_of(target)?;
        let has_id = has_id(&fields);
        let has_organisation_id = has_organisation_id(&fields);
        let fields = fields
            .into_iter()
            .map(|field| model_field(field, output))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            ident: &target.item.ident,
            vis: &target.item.vis,
            fields,
            has_id,
            has_organisation_id,
        })
    }
}

fn model_field(field: StructField, output: &Utf8Path) -> Result<ModelField, GenerateError> {
    let name = field.name();
    let ty = syn::parse_str(&field.ty).map_err(|err| GenerateError::Render {
        path: output.to_path_buf(),
        message: format!("field {name}: {err}"),
    })?;
    Ok(ModelField {
        ident: field.ident,
        name,
        ty,
    })
}

/// Renders every requested kind for `targets` into the text of `output`.
pub(crate) fn render_file(
    output: &Utf8Path,
    targets: &[&Target],
    krate: &syn::Path,
) -> Result<String, GenerateError> {
    let mut tokens = TokenStream::new();
    for target in targets {
        let model = Model::new(target, output)?;
        for kind in &target.kinds {
            tokens.extend(match kind {
                Kind::Builder => builder::render(&model, krate),
                Kind::Matcher => matcher::render(&model, krate),
            });
        }
    }

    let file: syn::File = syn::parse2(tokens).map_err(|err| GenerateError::Render {
        path: output.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(format!("{HEADER}\n\n{}", prettyplease::unparse(&file)))
}

/// `#[doc]` attributes for `text`, one per line.
fn doc(text: &str) -> TokenStream {
    let lines = text.lines().map(|line| {
        if line.is_empty() {
            String::new()
        } else {
            format!(" {line}")
        }
    });
    quote! { #( #[doc = #lines] )* }
}
