//! Field-wise matchers for test assertions.
//!
//! A [`Matcher`] checks a value against a set of per-field expectations and
//! ignores every field it has no expectation for. Generated `<Type>Matcher`
//! helpers build these from one constructor per field.
//!
//! ```rust
//! use partial::{FieldMatcher, Matcher};
//!
//! #[derive(Debug)]
//! struct Incident {
//!     name: String,
//!     severity: u8,
//! }
//!
//! let matcher = Matcher::new([
//!     FieldMatcher::equal("name", String::from("outage"), |incident: &Incident| &incident.name),
//!     FieldMatcher::satisfies("severity", |incident: &Incident| &incident.severity, |severity| *severity > 2),
//! ]);
//!
//! let incident = Incident { name: String::from("outage"), severity: 3 };
//! assert!(matcher.matches(&incident));
//! ```

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

type Check<T> = dyn Fn(&T) -> Result<(), String>;

/// An expectation on a single field.
pub struct FieldMatcher<T> {
    field: &'static str,
    check: Rc<Check<T>>,
}

impl<T> FieldMatcher<T> {
    /// Creates a matcher from a check returning a mismatch description.
    pub fn new<F>(field: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + 'static,
    {
        Self {
            field,
            check: Rc::new(check),
        }
    }

    /// Expects the field read by `get` to equal `expected`.
    pub fn equal<V>(field: &'static str, expected: V, get: fn(&T) -> &V) -> Self
    where
        T: 'static,
        V: PartialEq + fmt::Debug + 'static,
    {
        Self::new(field, move |actual| {
            let value = get(actual);
            if *value == expected {
                Ok(())
            } else {
                Err(format!("expected {expected:?}, got {value:?}"))
            }
        })
    }

    /// Expects the field read by `get` to satisfy `predicate`.
    pub fn satisfies<V, P>(field: &'static str, get: fn(&T) -> &V, predicate: P) -> Self
    where
        T: 'static,
        V: fmt::Debug + 'static,
        P: Fn(&V) -> bool + 'static,
    {
        Self::new(field, move |actual| {
            let value = get(actual);
            if predicate(value) {
                Ok(())
            } else {
                Err(format!("{value:?} did not satisfy the predicate"))
            }
        })
    }

    /// Name of the field this matcher inspects.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field
    }

    fn check(&self, actual: &T) -> Result<(), FieldMismatch> {
        (self.check)(actual).map_err(|message| FieldMismatch {
            field: self.field,
            message,
        })
    }
}

impl<T> Clone for FieldMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            check: Rc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for FieldMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMatcher")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// One failed field expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// Field that did not match.
    pub field: &'static str,
    /// Description of the difference.
    pub message: String,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed expectation of a [`Matcher`] check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) did not match:\n{}", .mismatches.len(), render(.mismatches))]
pub struct MatchFailure {
    /// Mismatches in matcher order.
    pub mismatches: Vec<FieldMismatch>,
}

fn render(mismatches: &[FieldMismatch]) -> String {
    mismatches
        .iter()
        .map(|mismatch| format!("  - {mismatch}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A set of field expectations, at most one per field.
///
/// Adding a matcher for a field that already has one replaces it, so later
/// matchers take precedence. Fields without an expectation are ignored.
pub struct Matcher<T> {
    fields: Vec<FieldMatcher<T>>,
}

impl<T> Matcher<T> {
    /// Creates a matcher from field expectations, applied first to last.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = FieldMatcher<T>>,
    {
        fields.into_iter().fold(Self { fields: Vec::new() }, Self::with)
    }

    /// Adds or replaces the expectation for one field.
    #[must_use]
    pub fn with(mut self, field: FieldMatcher<T>) -> Self {
        match self.fields.iter_mut().find(|existing| existing.field == field.field) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Names of the fields with an expectation.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldMatcher::name)
    }

    /// Checks `actual`, collecting every mismatch.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchFailure`] listing each field that did not match.
    pub fn check(&self, actual: &T) -> Result<(), MatchFailure> {
        let mismatches: Vec<_> = self
            .fields
            .iter()
            .filter_map(|field| field.check(actual).err())
            .collect();
        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(MatchFailure { mismatches })
        }
    }

    /// Whether `actual` meets every expectation.
    #[must_use]
    pub fn matches(&self, actual: &T) -> bool {
        self.fields.iter().all(|field| field.check(actual).is_ok())
    }

    /// Asserts that `actual` meets every expectation.
    ///
    /// # Panics
    ///
    /// Panics with the [`MatchFailure`] description when any field does not
    /// match.
    #[track_caller]
    pub fn assert_matches(&self, actual: &T) {
        if let Err(failure) = self.check(actual) {
            panic!("{failure}");
        }
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.field_names()).finish()
    }
}
