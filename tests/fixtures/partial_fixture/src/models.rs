//! Sample models with generated builders and matchers.

use partial::Tracked;

/// An organisation owning incidents.
///
/// codegen-partial:builder,matcher
#[derive(Debug, Default, Clone, PartialEq, Eq, Tracked)]
pub struct Organisation {
    /// Primary key.
    #[partial(orm = "type:text;primaryKey;default:generate_ulid()")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form optional text.
    pub optional_string: Option<String>,
    /// Feature flag.
    pub bool_flag: bool,
}

/// An incident raised within an organisation.
///
/// codegen-partial:builder,matcher
#[derive(Debug, Default, Clone, PartialEq, Eq, Tracked)]
pub struct Incident {
    /// Primary key.
    #[partial(orm = "type:text;primaryKey;default:generate_ulid()")]
    pub id: String,
    /// Owning organisation.
    pub organisation_id: String,
    /// Loaded owning organisation.
    #[partial(relation)]
    pub organisation: Option<Box<Organisation>>,
    /// Creation time in seconds since the epoch.
    #[partial(orm = "column:reported_at;not null")]
    pub created_at: u64,
}

include!("models.partialgen.rs");
