//! `<Type>Matcher` rendering.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{Model, doc};

pub(super) fn render(model: &Model<'_>, krate: &syn::Path) -> TokenStream {
    let Model { ident, vis, .. } = *model;
    let matcher = format_ident!("{}Matcher", ident);

    let struct_doc = doc(&format!(
        "Matches `{ident}` values against per-field expectations.\n\n\
         Matchers are applied first to last, with later matchers taking precedence.\n\
         Fields without an expectation are ignored."
    ));
    let constructors = model.fields.iter().map(|field| {
        let member = &field.ident;
        let name = &field.name;
        let ty = &field.ty;
        let predicate = field.predicate_ident();
        let equal_doc = doc(&format!("Expects `{name}` to equal `value`."));
        let predicate_doc = doc(&format!("Expects `{name}` to satisfy `predicate`."));
        quote! {
            #equal_doc
            #vis fn #member(value: #ty) -> #krate::FieldMatcher<#ident> {
                #krate::FieldMatcher::equal(#name, value, |subject: &#ident| &subject.#member)
            }

            #predicate_doc
            #vis fn #predicate<P>(predicate: P) -> #krate::FieldMatcher<#ident>
            where
                P: ::core::ops::Fn(&#ty) -> bool + 'static,
            {
                #krate::FieldMatcher::satisfies(#name, |subject: &#ident| &subject.#member, predicate)
            }
        }
    });
    let method_doc = doc(&format!("Builds a matcher for `{ident}`, see `{matcher}`."));

    quote! {
        #struct_doc
        #vis struct #matcher;

        impl #matcher {
            /// Collects `matchers`, keeping the last one given per field.
            #vis fn build<I>(matchers: I) -> #krate::Matcher<#ident>
            where
                I: ::core::iter::IntoIterator<Item = #krate::FieldMatcher<#ident>>,
            {
                #krate::Matcher::new(matchers)
            }

            #( #constructors )*
        }

        impl #ident {
            #method_doc
            #vis fn matcher<I>(matchers: I) -> #krate::Matcher<Self>
            where
                I: ::core::iter::IntoIterator<Item = #krate::FieldMatcher<Self>>,
            {
                #matcher::build(matchers)
            }
        }
    }
}
