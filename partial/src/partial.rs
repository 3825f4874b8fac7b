//! The tracked value wrapper.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::{Column, Schema, SchemaError, Setter, Tracked};

/// A value of type `T` plus the fields known to have been explicitly set.
///
/// Tracking fields lets callers restrict `INSERT`/`UPDATE` statements to the
/// columns that were actually assigned, instead of writing default values
/// over existing data, and lets tests assert on a subset of fields.
///
/// A partial keeps three things:
///
/// - the subject, with every tracked field written;
/// - the ordered list of tracked field names, which may contain repeats after
///   [`merge`](Self::merge);
/// - the apply-chain, the ordered list of setters that
///   [`apply`](Self::apply) replays over a base value.
///
/// Partials are plain owned values. Every operation consumes `self` and
/// returns a new partial; clone first to keep the original.
pub struct Partial<T> {
    subject: T,
    field_names: Vec<&'static str>,
    chain: Vec<Setter<T>>,
}

impl<T> Partial<T> {
    /// Wraps `subject` without tracking any field.
    pub const fn untracked(subject: T) -> Self {
        Self {
            subject,
            field_names: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Applies `setters` in order, tracking every field they write.
    ///
    /// Names are appended without deduplication. Later setters take
    /// precedence over earlier ones, both in the subject and when the chain
    /// is replayed by [`apply`](Self::apply).
    #[must_use]
    pub fn add<I>(mut self, setters: I) -> Self
    where
        I: IntoIterator<Item = Setter<T>>,
    {
        for setter in setters {
            let name = setter.apply(&mut self.subject);
            self.field_names.push(name);
            self.chain.push(setter);
        }
        self
    }

    /// Stops tracking `names`.
    ///
    /// Every occurrence of each name is removed from the tracked list, so the
    /// field is no longer matched or selected as a column. The subject and
    /// the apply-chain are unchanged: [`apply`](Self::apply) still overlays
    /// the field. Names that are not tracked are ignored.
    #[must_use]
    pub fn without(mut self, names: &[&str]) -> Self {
        self.field_names.retain(|name| !names.contains(name));
        self
    }

    /// Combines `self` with `other`, with `other` taking precedence.
    ///
    /// The tracked list is the concatenation of both lists and the chain
    /// replays `self`'s setters before `other`'s, so a field tracked by both
    /// ends up with `other`'s value regardless of list order.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let subject = other.apply(self.subject);
        let mut field_names = self.field_names;
        field_names.extend(other.field_names);
        let mut chain = self.chain;
        chain.extend(other.chain);
        Self {
            subject,
            field_names,
            chain,
        }
    }

    /// Overlays every tracked field onto `base`.
    ///
    /// Setters run in chain order; fields that are not tracked keep the value
    /// they had in `base`.
    #[must_use]
    pub fn apply(&self, mut base: T) -> T {
        for setter in &self.chain {
            setter.apply(&mut base);
        }
        base
    }

    /// Whether no field is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty()
    }

    /// Tracked field names in the order they were set.
    #[must_use]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Whether `name` is tracked.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.field_names.iter().any(|field| *field == name)
    }

    /// The wrapped value.
    #[must_use]
    pub const fn subject(&self) -> &T {
        &self.subject
    }

    /// Unwraps the value, discarding tracking information.
    #[must_use]
    pub fn into_subject(self) -> T {
        self.subject
    }
}

impl<T: Tracked> Partial<T> {
    /// Builds a partial from a value loaded from the database.
    ///
    /// Every field that maps to a persisted column is tracked, in declaration
    /// order, with its value copied from `source`. Relations and ignored
    /// fields stay untracked and keep their default value in the subject.
    ///
    /// Only use this for fully populated values. Values assembled by hand
    /// should be built through their generated builders so that only the
    /// assigned fields are tracked.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when the column metadata of `T` cannot be
    /// resolved.
    pub fn from_existing(source: &T) -> Result<Self, SchemaError>
    where
        T: Default + Clone + 'static,
    {
        let schema = Schema::<T>::parse()?;
        let source = Rc::new(source.clone());
        let setters = schema
            .columns()
            .iter()
            .filter_map(|column| schema.field(column.field))
            .map(|def| {
                let def = *def;
                let source = Rc::clone(&source);
                Setter::new(def.name(), move |subject: &mut T| {
                    def.copy_into(subject, &source);
                })
            })
            .collect::<Vec<_>>();

        Ok(Self::default().add(setters))
    }

    /// Checks `other` against the tracked fields only.
    ///
    /// A partial that tracks nothing matches `None` and every value. A
    /// partial that tracks something never matches `None`. Otherwise every
    /// tracked field must compare equal; untracked fields are ignored.
    /// A tracked name that `T` does not describe never matches.
    #[must_use]
    pub fn matches(&self, other: Option<&T>) -> bool {
        if self.field_names.is_empty() {
            return true;
        }
        let Some(other) = other else {
            return false;
        };

        let fields = T::fields();
        self.field_names.iter().all(|name| {
            let Some(def) = fields.iter().find(|def| def.name() == *name) else {
                warn!(
                    type_name = std::any::type_name::<T>(),
                    field = name,
                    "tracked field has no description"
                );
                return false;
            };
            let equal = def.equals(&self.subject, other);
            if !equal {
                debug!(field = name, "tracked field does not match");
            }
            equal
        })
    }

    /// Columns for the tracked fields, deduplicated, in first-tracked order.
    ///
    /// Tracked fields that are not persisted are skipped. This is the column
    /// selection for a partial `UPDATE`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when the column metadata of `T` cannot be
    /// resolved.
    pub fn tracked_columns(&self) -> Result<Vec<Column>, SchemaError> {
        let schema = Schema::<T>::parse()?;
        let mut columns: Vec<Column> = Vec::new();
        for name in &self.field_names {
            let Some(column) = schema.column_for(name) else {
                continue;
            };
            if !columns.iter().any(|seen| seen.field == column.field) {
                columns.push(column.clone());
            }
        }
        Ok(columns)
    }
}

impl<T: Default> Default for Partial<T> {
    fn default() -> Self {
        Self::untracked(T::default())
    }
}

impl<T: Clone> Clone for Partial<T> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            field_names: self.field_names.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Partial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial")
            .field("subject", &self.subject)
            .field("field_names", &self.field_names)
            .finish_non_exhaustive()
    }
}
