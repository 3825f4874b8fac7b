//! Procedural macros for `partial`.
//!
//! `#[derive(Tracked)]` turns a struct with named fields into a field table:
//! one descriptor per field holding its name, optional ORM tag, whether it
//! is an association, and functions to copy and compare it. The runtime uses
//! the table wherever it would otherwise need reflection.
//!
//! Recognised attributes:
//!
//! - `#[partial(crate = "path")]` on the struct overrides the path of the
//!   runtime crate in generated code (default `::partial`).
//! - `#[partial(orm = "column:name;primaryKey")]` on a field records the ORM
//!   tag used to resolve columns.
//! - `#[partial(relation)]` marks a field as an association, never a column.
//! - `#[partial(skip)]` leaves a field out of the table entirely. Use it for
//!   fields that are not `Clone` or `PartialEq`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `partial::Tracked`.
///
/// Every non-skipped field must implement `Clone` and `PartialEq`.
#[proc_macro_derive(Tracked, attributes(partial))]
pub fn derive_tracked(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
