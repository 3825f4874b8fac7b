//! Errors raised while resolving a tracked type's schema.

use thiserror::Error;

/// Errors that can occur while resolving the column metadata of a type.
///
/// Every variant names the Rust type and field whose declaration is
/// malformed so the caller can decide whether to treat it as a bootstrap
/// failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// An ORM tag used a key that is not recognised.
    #[error("unknown tag key '{key}' on field '{field}' of {type_name}")]
    UnknownTagKey {
        /// Type owning the field.
        type_name: &'static str,
        /// Field carrying the tag.
        field: &'static str,
        /// The unrecognised key.
        key: String,
    },

    /// A tag key that requires a value was given without one.
    #[error("tag key '{key}' on field '{field}' of {type_name} requires a value")]
    MissingTagValue {
        /// Type owning the field.
        type_name: &'static str,
        /// Field carrying the tag.
        field: &'static str,
        /// The key missing its value.
        key: String,
    },

    /// `column:` was given an empty name.
    #[error("empty column name on field '{field}' of {type_name}")]
    EmptyColumnName {
        /// Type owning the field.
        type_name: &'static str,
        /// Field carrying the tag.
        field: &'static str,
    },

    /// Two fields resolve to the same column.
    #[error("column '{column}' of {type_name} is declared by both '{first}' and '{second}'")]
    DuplicateColumn {
        /// Type owning the fields.
        type_name: &'static str,
        /// The shared column name.
        column: String,
        /// Field declared first.
        first: &'static str,
        /// Field declared second.
        second: &'static str,
    },
}
