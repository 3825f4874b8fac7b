//! The `partial:<kinds>` doc-comment marker.

use std::fmt;

use syn::{Attribute, Expr, Lit, Meta};

const MARKER: &str = "partial:";

/// Code that can be requested for a marked struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `<Type>Builder` plus the accessor trait impls.
    Builder,
    /// `<Type>Matcher` plus `Type::matcher`.
    Matcher,
}

impl Kind {
    /// Parses one marker token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "builder" => Some(Self::Builder),
            "matcher" => Some(Self::Matcher),
            _ => None,
        }
    }

    /// The token naming this kind in a marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builder => "builder",
            Self::Matcher => "matcher",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a marker could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarkerError {
    Empty,
    Unknown(String),
}

/// Joins the `#[doc]` attributes of an item, one line per attribute.
pub(crate) fn doc_text(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(text) => Some(text.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The token following the first `partial:` in `doc`, up to whitespace.
///
/// Returns `None` when there is no marker and an empty string when the
/// marker is not followed by a token.
pub(crate) fn find(doc: &str) -> Option<&str> {
    let (_, rest) = doc.split_once(MARKER)?;
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    rest.get(..end)
}

/// Splits a marker token into kinds, keeping first occurrences in order.
pub(crate) fn parse_kinds(token: &str) -> Result<Vec<Kind>, MarkerError> {
    if token.is_empty() {
        return Err(MarkerError::Empty);
    }
    let mut kinds = Vec::new();
    for part in token.split(',') {
        let kind = Kind::parse(part).ok_or_else(|| MarkerError::Unknown(part.to_owned()))?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}
