//! Field setters replayed by [`Partial`](crate::Partial).

use std::fmt;
use std::rc::Rc;

type Assign<T> = dyn Fn(&mut T);

/// A recorded assignment of one field.
///
/// Setters are the entries of a partial's apply-chain. Each one knows the
/// field it writes, so the chain stays an explicit ordered list of
/// `(field, value)` pairs that can be replayed against any base value.
/// Cloning a setter is cheap: the assignment is shared.
pub struct Setter<T> {
    field: &'static str,
    assign: Rc<Assign<T>>,
}

impl<T> Setter<T> {
    /// Creates a setter for `field` from an arbitrary assignment.
    ///
    /// The closure must only write the named field; the name is what
    /// [`Partial::matches`](crate::Partial::matches) and column selection
    /// rely on.
    pub fn new<F>(field: &'static str, assign: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        Self {
            field,
            assign: Rc::new(assign),
        }
    }

    /// Creates a setter storing `value` and writing it with `assign`.
    ///
    /// This is the form emitted by generated builders:
    ///
    /// ```rust
    /// use partial::Setter;
    ///
    /// #[derive(Default)]
    /// struct Incident {
    ///     name: String,
    /// }
    ///
    /// let setter = Setter::field("name", String::from("outage"), |subject: &mut Incident, value| {
    ///     subject.name = value;
    /// });
    /// let mut incident = Incident::default();
    /// assert_eq!(setter.apply(&mut incident), "name");
    /// assert_eq!(incident.name, "outage");
    /// ```
    pub fn field<V>(field: &'static str, value: V, assign: fn(&mut T, V)) -> Self
    where
        T: 'static,
        V: Clone + 'static,
    {
        Self::new(field, move |subject| assign(subject, value.clone()))
    }

    /// Name of the field this setter writes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field
    }

    /// Writes the field on `subject` and returns its name.
    pub fn apply(&self, subject: &mut T) -> &'static str {
        (self.assign)(subject);
        self.field
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            assign: Rc::clone(&self.assign),
        }
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter").field("field", &self.field).finish_non_exhaustive()
    }
}
