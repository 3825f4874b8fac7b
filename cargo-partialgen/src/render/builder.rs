//! `<Type>Builder` rendering.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Model, doc};

pub(super) fn render(model: &Model<'_>, krate: &syn::Path) -> TokenStream {
    let Model { ident, vis, .. } = *model;
    let builder = format_ident!("{}Builder", ident);

    let struct_doc = doc(&format!(
        "Builds `Partial<{ident}>` values from field setters.\n\n\
         Setters are applied first to last, with later setters taking precedence."
    ));
    let setters = model.fields.iter().map(|field| {
        let member = &field.ident;
        let name = &field.name;
        let ty = &field.ty;
        let setter_doc = doc(&format!("Sets `{name}`."));
        quote! {
            #setter_doc
            #vis fn #member(value: #ty) -> #krate::Setter<#ident> {
                #krate::Setter::field(#name, value, |subject: &mut #ident, value| {
                    subject.#member = value;
                })
            }
        }
    });
    let accessors = accessors(model, krate);

    quote! {
        #struct_doc
        #vis struct #builder;

        impl #builder {
            /// Tracks every field written by `setters`.
            #vis fn build<I>(setters: I) -> #krate::Partial<#ident>
            where
                I: ::core::iter::IntoIterator<Item = #krate::Setter<#ident>>,
            {
                #krate::Partial::default().add(setters)
            }

            #( #setters )*
        }

        #accessors
    }
}

fn accessors(model: &Model<'_>, krate: &syn::Path) -> TokenStream {
    let ident = model.ident;
    let mut tokens = TokenStream::new();
    if model.has_id {
        tokens.extend(quote! {
            impl #krate::HasId for #ident {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        });
    }
    if model.has_organisation_id {
        tokens.extend(quote! {
            impl #krate::HasOrganisationId for #ident {
                fn organisation_id(&self) -> &str {
                    &self.organisation_id
                }
            }
        });
    }
    tokens
}
