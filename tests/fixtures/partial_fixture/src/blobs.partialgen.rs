// Code generated by cargo-partialgen, DO NOT EDIT.

/// Builds `Partial<Blob>` values from field setters.
///
/// Setters are applied first to last, with later setters taking precedence.
pub struct BlobBuilder;
impl BlobBuilder {
    /// Tracks every field written by `setters`.
    pub fn build<I>(setters: I) -> ::partial::Partial<Blob>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::Setter<Blob>>,
    {
        ::partial::Partial::default().add(setters)
    }
    /// Sets `data`.
    pub fn data(value: Option<*const u8>) -> ::partial::Setter<Blob> {
        ::partial::Setter::field(
            "data",
            value,
            |subject: &mut Blob, value| {
                subject.data = value;
            },
        )
    }
    /// Sets `owner`.
    pub fn owner(value: Rc<u8>) -> ::partial::Setter<Blob> {
        ::partial::Setter::field(
            "owner",
            value,
            |subject: &mut Blob, value| {
                subject.owner = value;
            },
        )
    }
}
/// Matches `Blob` values against per-field expectations.
///
/// Matchers are applied first to last, with later matchers taking precedence.
/// Fields without an expectation are ignored.
pub struct BlobMatcher;
impl BlobMatcher {
    /// Collects `matchers`, keeping the last one given per field.
    pub fn build<I>(matchers: I) -> ::partial::Matcher<Blob>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Blob>>,
    {
        ::partial::Matcher::new(matchers)
    }
    /// Expects `data` to equal `value`.
    pub fn data(value: Option<*const u8>) -> ::partial::FieldMatcher<Blob> {
        ::partial::FieldMatcher::equal("data", value, |subject: &Blob| &subject.data)
    }
    /// Expects `data` to satisfy `predicate`.
    pub fn match_data<P>(predicate: P) -> ::partial::FieldMatcher<Blob>
    where
        P: ::core::ops::Fn(&Option<*const u8>) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "data",
            |subject: &Blob| &subject.data,
            predicate,
        )
    }
    /// Expects `owner` to equal `value`.
    pub fn owner(value: Rc<u8>) -> ::partial::FieldMatcher<Blob> {
        ::partial::FieldMatcher::equal("owner", value, |subject: &Blob| &subject.owner)
    }
    /// Expects `owner` to satisfy `predicate`.
    pub fn match_owner<P>(predicate: P) -> ::partial::FieldMatcher<Blob>
    where
        P: ::core::ops::Fn(&Rc<u8>) -> bool + 'static,
    {
        ::partial::FieldMatcher::satisfies(
            "owner",
            |subject: &Blob| &subject.owner,
            predicate,
        )
    }
}
impl Blob {
    /// Builds a matcher for `Blob`, see `BlobMatcher`.
    pub fn matcher<I>(matchers: I) -> ::partial::Matcher<Self>
    where
        I: ::core::iter::IntoIterator<Item = ::partial::FieldMatcher<Self>>,
    {
        BlobMatcher::build(matchers)
    }
}
