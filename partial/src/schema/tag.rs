//! ORM tag parsing.
//!
//! Tags follow the GORM conventions the persisted models were written
//! against: `;`-separated segments, each either a bare key or `key:value`,
//! with keys compared case-insensitively and empty segments ignored.

use crate::SchemaError;

/// Keys whose value is mandatory.
const VALUED_KEYS: &[&str] = &[
    "type",
    "size",
    "default",
    "precision",
    "scale",
    "serializer",
    "comment",
    "check",
];

/// Keys that may appear bare or with a value and do not affect tracking.
const FLAG_KEYS: &[&str] = &[
    "unique",
    "not null",
    "autoincrement",
    "autocreatetime",
    "autoupdatetime",
    "index",
    "uniqueindex",
    "<-",
    "->",
];

/// Keys that mark the field as an association rather than a column.
const RELATION_KEYS: &[&str] = &[
    "foreignkey",
    "references",
    "polymorphic",
    "polymorphicvalue",
    "many2many",
    "joinforeignkey",
    "joinreferences",
    "constraint",
];

/// The parts of a tag that decide whether and how a field is persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    pub ignored: bool,
    pub relation: bool,
    pub column: Option<String>,
    pub primary_key: bool,
}

impl Tag {
    /// Whether the field maps to a column.
    pub(crate) const fn is_column(&self) -> bool {
        !self.ignored && !self.relation
    }
}

/// Parses the raw tag declared on `field` of `type_name`.
pub(crate) fn parse(
    type_name: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<Tag, SchemaError> {
    let mut tag = Tag::default();
    for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = match segment.split_once(':') {
            Some((key, value)) => (key.trim(), Some(value.trim())),
            None => (segment, None),
        };
        let lowered = key.to_ascii_lowercase();
        match lowered.as_str() {
            "-" => match value {
                None | Some("all") => tag.ignored = true,
                Some("migration") => {}
                Some(_) => return Err(unknown(type_name, field, segment)),
            },
            "column" => {
                let name = require_value(type_name, field, key, value)?;
                if name.is_empty() {
                    return Err(SchemaError::EmptyColumnName { type_name, field });
                }
                tag.column = Some(name.to_owned());
            }
            "primarykey" | "primary_key" => tag.primary_key = true,
            other if VALUED_KEYS.contains(&other) => {
                require_value(type_name, field, key, value)?;
            }
            other if FLAG_KEYS.contains(&other) => {}
            other if RELATION_KEYS.contains(&other) => tag.relation = true,
            _ => return Err(unknown(type_name, field, key)),
        }
    }
    Ok(tag)
}

fn require_value<'a>(
    type_name: &'static str,
    field: &'static str,
    key: &str,
    value: Option<&'a str>,
) -> Result<&'a str, SchemaError> {
    value.ok_or_else(|| SchemaError::MissingTagValue {
        type_name,
        field,
        key: key.to_owned(),
    })
}

fn unknown(type_name: &'static str, field: &'static str, key: &str) -> SchemaError {
    SchemaError::UnknownTagKey {
        type_name,
        field,
        key: key.to_owned(),
    }
}
