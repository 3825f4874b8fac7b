//! Error types for `cargo-partialgen`.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::type_name::TypeError;

/// Errors surfaced by the generation pipeline.
///
/// Any error aborts the whole run before a single file is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Reading the directory or a file, or writing an output, failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {path}:{line}:{column}: {message}")]
    Parse {
        /// Source file.
        path: Utf8PathBuf,
        /// One-based line of the error.
        line: usize,
        /// One-based column of the error.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// A marker names no kinds at all.
    #[error("empty codegen marker for {type_name} in {path}")]
    EmptyMarker {
        /// Marked type.
        type_name: String,
        /// Source file.
        path: Utf8PathBuf,
    },

    /// A marker names something other than `builder` or `matcher`.
    #[error("unrecognised codegen kind for {type_name} in {path}: {kind:?}")]
    UnknownKind {
        /// Marked type.
        type_name: String,
        /// Source file.
        path: Utf8PathBuf,
        /// The offending kind.
        kind: String,
    },

    /// A marker sits on an item that is not a struct.
    #[error("could not find struct for name {type_name} referenced by file {path}")]
    MissingStruct {
        /// Marked item.
        type_name: String,
        /// Source file.
        path: Utf8PathBuf,
    },

    /// Generic structs cannot be generated for.
    #[error("cannot generate code for generic type {type_name} in {path}")]
    GenericType {
        /// Marked type.
        type_name: String,
        /// Source file.
        path: Utf8PathBuf,
    },

    /// A field type cannot be written back as source text.
    #[error("field {field} on type {type_name} in {path}: {source}")]
    UnsupportedType {
        /// Marked type.
        type_name: String,
        /// Offending field.
        field: String,
        /// Source file.
        path: Utf8PathBuf,
        /// Why the type was rejected.
        #[source]
        source: TypeError,
    },

    /// `--crate-path` is not a Rust path.
    #[error("invalid crate path {path:?}: {message}")]
    InvalidCratePath {
        /// Value as given.
        path: String,
        /// Parser message.
        message: String,
    },

    /// Generated tokens did not form a valid file.
    #[error("failed to render {path}: {message}")]
    Render {
        /// Output file.
        path: Utf8PathBuf,
        /// Parser message.
        message: String,
    },

    /// `--check` found outputs that differ from disk.
    #[error("generated files are out of date: {}", join(.paths))]
    OutOfDate {
        /// Files that would be written or removed.
        paths: Vec<Utf8PathBuf>,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn join(paths: &[Utf8PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
