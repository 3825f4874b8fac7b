// Code generated by cargo-partialgen, DO NOT EDIT.

/// Builds `Partial<Organisation>` values from field setters.
///
/// Setters are applied first to last, with later setters taking precedence.
pub struct OrganisationBuilder;
impl OrganisationBuilder {
    /// Tracks every field written by `setters`.
    pub fn build<I>(setters: I) -> ::partial::Partial<Organisation>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::Setter<Organisation>>,
    {
        ::partial::Partial::default().add(setters)
    }
    /// Sets `id`.
    pub fn id(value: String) -> ::partial::Setter<Organisation> {
        ::partial::Setter::field(
            "id",
            value,
            |subject: &mut Organisation, value| {
                subject.id = value;
            },
        )
    }
    /// Sets `name`.
    pub fn name(value: String) -> ::partial::Setter<Organisation> {
        ::partial::Setter::field(
            "name",
            value,
            |subject: &mut Organisation, value| {
                subject.name = value;
            },
        )
    }
    /// Sets `optional_string`.
    pub fn optional_string(value: Option<String>) -> ::partial::Setter<Organisation> {
        ::partial::Setter::field(
            "optional_string",
            value,
            |subject: &mut Organisation, value| {
                subject.optional_string = value;
            },
        )
    }
    /// Sets `bool_flag`.
    pub fn bool_flag(value: bool) -> ::partial::Setter<Organisation> {
        ::partial::Setter::field(
            "bool_flag",
            value,
            |subject: &mut Organisation, value| {
                subject.bool_flag = value;
            },
        )
    }
}
impl ::partial::HasId for Organisation {
    fn id(&self) -> &str {
        &self.id
    }
}
/// Matches `Organisation` values against per-field expectations.
///
/// Matchers are applied first to last, with later matchers taking precedence.
/// Fields without an expectation are ignored.
pub struct OrganisationMatcher;
impl OrganisationMatcher {
    /// Collects `matchers`, keeping the last one given per field.
    pub fn build<I>(matchers: I) -> ::partial::Matcher<Organisation>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Organisation>>,
    {
        ::partial::Matcher::new(matchers)
    }
    /// Expects `id` to equal `value`.
    pub fn id(value: String) -> ::partial::FieldMatcher<Organisation> {
        ::partial::FieldMatcher::equal("id", value, |subject: &Organisation| &subject.id)
    }
    /// Expects `id` to satisfy `predicate`.
    pub fn match_id<P>(predicate: P) -> ::partial::FieldMatcher<Organisation>
    where
        P: ::core::ops::Fn(&String) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "id",
            |subject: &Organisation| &subject.id,
            predicate,
        )
    }
    /// Expects `name` to equal `value`.
    pub fn name(value: String) -> ::partial::FieldMatcher<Organisation> {
        ::partial::FieldMatcher::equal(
            "name",
            value,
            |subject: &Organisation| &subject.name,
        )
    }
    /// Expects `name` to satisfy `predicate`.
    pub fn match_name<P>(predicate: P) -> ::partial::FieldMatcher<Organisation>
    where
        P: ::core::ops::Fn(&String) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "name",
            |subject: &Organisation| &subject.name,
            predicate,
        )
    }
    /// Expects `optional_string` to equal `value`.
    pub fn optional_string(
        value: Option<String>,
    ) -> ::partial::FieldMatcher<Organisation> {
        ::partial::FieldMatcher::equal(
            "optional_string",
            value,
            |subject: &Organisation| &subject.optional_string,
        )
    }
    /// Expects `optional_string` to satisfy `predicate`.
    pub fn match_optional_string<P>(
        predicate: P,
    ) -> ::partial::FieldMatcher<Organisation>
    where
        P: ::core::ops::Fn(&Option<String>) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "optional_string",
            |subject: &Organisation| &subject.optional_string,
            predicate,
        )
    }
    /// Expects `bool_flag` to equal `value`.
    pub fn bool_flag(value: bool) -> ::partial::FieldMatcher<Organisation> {
        ::partial::FieldMatcher::equal(
            "bool_flag",
            value,
            |subject: &Organisation| &subject.bool_flag,
        )
    }
    /// Expects `bool_flag` to satisfy `predicate`.
    pub fn match_bool_flag<P>(predicate: P) -> ::partial::FieldMatcher<Organisation>
    where
        P: ::core::ops::Fn(&bool) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "bool_flag",
            |subject: &Organisation| &subject.bool_flag,
            predicate,
        )
    }
}
impl Organisation {
    /// Builds a matcher for `Organisation`, see `OrganisationMatcher`.
    pub fn matcher<I>(matchers: I) -> ::partial::Matcher<Self>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Self>>,
    {
        OrganisationMatcher::build(matchers)
    }
}
/// Builds `Partial<Incident>` values from field setters.
///
/// Setters are applied first to last, with later setters taking precedence.
pub struct IncidentBuilder;
impl IncidentBuilder {
    /// Tracks every field written by `setters`.
    pub fn build<I>(setters: I) -> ::partial::Partial<Incident>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::Setter<Incident>>,
    {
        ::partial::Partial::default().add(setters)
    }
    /// Sets `id`.
    pub fn id(value: String) -> ::partial::Setter<Incident> {
        ::partial::Setter::field(
            "id",
            value,
            |subject: &mut Incident, value| {
                subject.id = value;
            },
        )
    }
    /// Sets `organisation_id`.
    pub fn organisation_id(value: String) -> ::partial::Setter<Incident> {
        ::partial::Setter::field(
            "organisation_id",
            value,
            |subject: &mut Incident, value| {
                subject.organisation_id = value;
            },
        )
    }
    /// Sets `organisation`.
    pub fn organisation(
        value: Option<Box<Organisation>>,
    ) -> ::partial::Setter<Incident> {
        ::partial::Setter::field(
            "organisation",
            value,
            |subject: &mut Incident, value| {
                subject.organisation = value;
            },
        )
    }
    /// Sets `created_at`.
    pub fn created_at(value: u64) -> ::partial::Setter<Incident> {
        ::partial::Setter::field(
            "created_at",
            value,
            |subject: &mut Incident, value| {
                subject.created_at = value;
            },
        )
    }
}
impl ::partial::HasId for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}
impl ::partial::HasOrganisationId for Incident {
    fn organisation_id(&self) -> &str {
        &self.organisation_id
    }
}
/// Matches `Incident` values against per-field expectations.
///
/// Matchers are applied first to last, with later matchers taking precedence.
/// Fields without an expectation are ignored.
pub struct IncidentMatcher;
impl IncidentMatcher {
    /// Collects `matchers`, keeping the last one given per field.
    pub fn build<I>(matchers: I) -> ::partial::Matcher<Incident>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Incident>>,
    {
        ::partial::Matcher::new(matchers)
    }
    /// Expects `id` to equal `value`.
    pub fn id(value: String) -> ::partial::FieldMatcher<Incident> {
        ::partial::FieldMatcher::equal("id", value, |subject: &Incident| &subject.id)
    }
    /// Expects `id` to satisfy `predicate`.
    pub fn match_id<P>(predicate: P) -> ::partial::FieldMatcher<Incident>
    where
        P: ::core::ops::Fn(&String) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "id",
            |subject: &Incident| &subject.id,
            predicate,
        )
    }
    /// Expects `organisation_id` to equal `value`.
    pub fn organisation_id(value: String) -> ::partial::FieldMatcher<Incident> {
        ::partial::FieldMatcher::equal(
            "organisation_id",
            value,
            |subject: &Incident| &subject.organisation_id,
        )
    }
    /// Expects `organisation_id` to satisfy `predicate`.
    pub fn match_organisation_id<P>(predicate: P) -> ::partial::FieldMatcher<Incident>
    where
        P: ::core::ops::Fn(&String) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "organisation_id",
            |subject: &Incident| &subject.organisation_id,
            predicate,
        )
    }
    /// Expects `organisation` to equal `value`.
    pub fn organisation(
        value: Option<Box<Organisation>>,
    ) -> ::partial::FieldMatcher<Incident> {
        ::partial::FieldMatcher::equal(
            "organisation",
            value,
            |subject: &Incident| &subject.organisation,
        )
    }
    /// Expects `organisation` to satisfy `predicate`.
    pub fn match_organisation<P>(predicate: P) -> ::partial::FieldMatcher<Incident>
    where
        P: ::core::ops::Fn(&Option<Box<Organisation>>) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "organisation",
            |subject: &Incident| &subject.organisation,
            predicate,
        )
    }
    /// Expects `created_at` to equal `value`.
    pub fn created_at(value: u64) -> ::partial::FieldMatcher<Incident> {
        ::partial::FieldMatcher::equal(
            "created_at",
            value,
            |subject: &Incident| &subject.created_at,
        )
    }
    /// Expects `created_at` to satisfy `predicate`.
    pub fn match_created_at<P>(predicate: P) -> ::partial::FieldMatcher<Incident>
    where
        P: ::core::ops::Fn(&u64) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "created_at",
            |subject: &Incident| &subject.created_at,
            predicate,
        )
    }
}
impl Incident {
    /// Builds a matcher for `Incident`, see `IncidentMatcher`.
    pub fn matcher<I>(matchers: I) -> ::partial::Matcher<Self>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Self>>,
    {
        IncidentMatcher::build(matchers)
    }
}
