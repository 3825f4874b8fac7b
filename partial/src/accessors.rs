//! Conventional accessors emitted by generated builders.
//!
//! Generic code (repositories, authorisation checks) can accept any tracked
//! model exposing an identifier or its owning organisation without knowing
//! the concrete type.

/// Types with a conventional `id: String` field.
pub trait HasId {
    /// Returns the identifier.
    fn id(&self) -> &str;
}

/// Types with a conventional `organisation_id: String` parent reference.
pub trait HasOrganisationId {
    /// Returns the owning organisation's identifier.
    fn organisation_id(&self) -> &str;
}
