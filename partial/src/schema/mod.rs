//! Field tables and column resolution for tracked types.
//!
//! [`FieldDef`] is the compile-time description of one field produced by
//! `#[derive(Tracked)]`. [`Schema`] interprets those descriptions the way the
//! ORM does, deciding which fields are persisted columns and under which
//! name.

use std::fmt;

use heck::ToSnakeCase;
use tracing::debug;

use crate::{SchemaError, Tracked};

mod tag;

/// Whether a field holds a plain value or an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A value that may map to a column.
    Value,
    /// An association loaded through another table. Never a column.
    Relation,
}

/// Description of one trackable field.
pub struct FieldDef<T> {
    name: &'static str,
    tag: Option<&'static str>,
    kind: FieldKind,
    copy: fn(&mut T, &T),
    equals: fn(&T, &T) -> bool,
}

impl<T> FieldDef<T> {
    /// Creates a field description.
    ///
    /// `copy` must copy exactly this field from its second argument into its
    /// first; `equals` must compare exactly this field.
    pub const fn new(
        name: &'static str,
        tag: Option<&'static str>,
        kind: FieldKind,
        copy: fn(&mut T, &T),
        equals: fn(&T, &T) -> bool,
    ) -> Self {
        Self {
            name,
            tag,
            kind,
            copy,
            equals,
        }
    }

    /// The field's name as written in the struct.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The raw ORM tag, if one was declared.
    #[must_use]
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Whether the field is a value or an association.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Copies this field from `source` into `target`.
    pub fn copy_into(&self, target: &mut T, source: &T) {
        (self.copy)(target, source);
    }

    /// Compares this field between two values.
    #[must_use]
    pub fn equals(&self, left: &T, right: &T) -> bool {
        (self.equals)(left, right)
    }
}

impl<T> Clone for FieldDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDef<T> {}

impl<T> fmt::Debug for FieldDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A field persisted as a database column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name in the Rust struct.
    pub field: &'static str,
    /// Column name in the database.
    pub name: String,
    /// Whether the column is (part of) the primary key.
    pub primary_key: bool,
}

/// Resolved column view of a tracked type.
#[derive(Debug)]
pub struct Schema<T> {
    type_name: &'static str,
    fields: Vec<FieldDef<T>>,
    columns: Vec<Column>,
}

impl<T: Tracked> Schema<T> {
    /// Resolves the schema of `T` from its field table.
    ///
    /// Columns are returned in declaration order. Relations, fields tagged
    /// `-`, and fields whose tag names an association key are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when a tag is malformed or two fields map to
    /// the same column.
    pub fn parse() -> Result<Self, SchemaError> {
        let type_name = std::any::type_name::<T>();
        let fields = T::fields();
        let mut columns: Vec<Column> = Vec::new();

        for def in &fields {
            let tag = tag::parse(type_name, def.name(), def.tag().unwrap_or_default())?;
            if def.kind() == FieldKind::Relation || !tag.is_column() {
                continue;
            }

            let name = tag.column.unwrap_or_else(|| def.name().to_snake_case());
            if let Some(existing) = columns.iter().find(|column| column.name == name) {
                return Err(SchemaError::DuplicateColumn {
                    type_name,
                    column: name,
                    first: existing.field,
                    second: def.name(),
                });
            }
            columns.push(Column {
                field: def.name(),
                name,
                primary_key: tag.primary_key,
            });
        }

        debug!(
            type_name,
            columns = ?columns.iter().map(|column| column.name.as_str()).collect::<Vec<_>>(),
            "resolved tracked schema"
        );
        Ok(Self {
            type_name,
            fields,
            columns,
        })
    }
}

impl<T> Schema<T> {
    /// Name of the described type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// All persisted columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column backing `field`, if it is persisted.
    #[must_use]
    pub fn column_for(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.field == field)
    }

    /// The description of `field`, persisted or not.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef<T>> {
        self.fields.iter().find(|def| def.name() == name)
    }

    /// Every described field in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef<T>] {
        &self.fields
    }
}
