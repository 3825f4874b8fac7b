//! Core crate for tracked partial values.
//!
//! A [`Partial`] wraps a value together with the ordered list of fields that
//! were explicitly set on it. The list drives partial database updates (only
//! the tracked columns are written) and partial-match assertions (only the
//! tracked fields are compared).
//!
//! Field knowledge comes from the [`Tracked`] trait, normally implemented with
//! `#[derive(Tracked)]` from the companion `partial_macros` crate. Builders and
//! matchers for annotated structs are generated ahead of compilation by
//! `cargo-partialgen`.
//!
//! ```rust
//! use partial::{Partial, Setter, Tracked};
//!
//! #[derive(Clone, Debug, Default, PartialEq, Tracked)]
//! struct Organisation {
//!     id: String,
//!     name: String,
//! }
//!
//! let tracked = Partial::<Organisation>::default()
//!     .add([Setter::field(
//!         "name",
//!         String::from("Peanuts"),
//!         |subject: &mut Organisation, value| subject.name = value,
//!     )]);
//!
//! let patched = tracked.apply(Organisation {
//!     id: String::from("org-1"),
//!     name: String::from("Old name"),
//! });
//! assert_eq!(patched.id, "org-1");
//! assert_eq!(patched.name, "Peanuts");
//! assert!(tracked.matches(Some(&patched)));
//! ```

pub use partial_macros::Tracked;

mod accessors;
mod error;
pub mod matcher;
mod partial;
pub mod schema;
mod setter;

pub use accessors::{HasId, HasOrganisationId};
pub use error::SchemaError;
pub use matcher::{FieldMatcher, MatchFailure, Matcher};
pub use partial::Partial;
pub use schema::{Column, FieldDef, FieldKind, Schema};
pub use setter::Setter;

/// Trait implemented by types whose fields can be tracked.
///
/// Implementations list every trackable field in declaration order. The
/// derive macro generates the table; hand-written implementations must keep
/// names unique and the copy and equality functions consistent with the
/// field they describe.
pub trait Tracked: Sized {
    /// Returns the field table for `Self`.
    fn fields() -> Vec<FieldDef<Self>>;
}
