//! Token generation for the `Tracked` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::ext::IdentExt;

use super::parse::TrackedField;

/// Builds the `Tracked` implementation listing `fields` in order.
pub(crate) fn tracked_impl(
    input: &DeriveInput,
    krate: &syn::Path,
    fields: &[TrackedField],
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let defs = fields.iter().map(|field| field_def(krate, field));

    quote! {
        impl #impl_generics #krate::Tracked for #ident #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<#krate::FieldDef<Self>> {
                ::std::vec![
                    #( #defs, )*
                ]
            }
        }
    }
}

/// Builds the `FieldDef` constructor call for one field.
pub(crate) fn field_def(krate: &syn::Path, field: &TrackedField) -> TokenStream {
    let member = &field.ident;
    let name = field.ident.unraw().to_string();
    let tag = field.attrs.orm.as_ref().map_or_else(
        || quote! { ::core::option::Option::None },
        |orm| quote! { ::core::option::Option::Some(#orm) },
    );
    let kind = if field.attrs.relation {
        quote! { #krate::FieldKind::Relation }
    } else {
        quote! { #krate::FieldKind::Value }
    };

    quote! {
        #krate::FieldDef::new(
            #name,
            #tag,
            #kind,
            |target: &mut Self, source: &Self| {
                ::core::clone::Clone::clone_from(&mut target.#member, &source.#member);
            },
            |left: &Self, right: &Self| left.#member == right.#member,
        )
    }
}
