//! Fixture crate for `cargo-partialgen` integration tests.
//!
//! Each module declares marked structs and includes its checked-in
//! `*.partialgen.rs` file. Regenerate them with
//! `cargo partialgen --dir tests/fixtures/partial_fixture/src`.

pub mod blobs;
pub mod models;

pub use blobs::{Blob, BlobBuilder, BlobMatcher};
pub use models::{
    Incident, IncidentBuilder, IncidentMatcher, Organisation, OrganisationBuilder,
    OrganisationMatcher,
};
