//! Discovery of marked structs in a source directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use syn::{Attribute, Ident, Item, ItemStruct};
use tracing::debug;

use crate::GENERATED_SUFFIX;
use crate::error::GenerateError;
use crate::marker::{self, Kind, MarkerError};

/// A struct requesting generated code.
#[derive(Debug, Clone)]
pub(crate) struct Target {
    /// Path of the source file, for diagnostics.
    pub(crate) path: Utf8PathBuf,
    /// File name of the source file within the directory.
    pub(crate) file_name: String,
    pub(crate) item: ItemStruct,
    pub(crate) kinds: Vec<Kind>,
}

/// Names of the regular files in `dir` accepted by `keep`, sorted.
pub(crate) fn list_files(
    dir: &Dir,
    root: &Utf8Path,
    keep: impl Fn(&str) -> bool,
) -> Result<Vec<String>, GenerateError> {
    let mut names = Vec::new();
    for entry in dir.read_dir(".").map_err(|err| GenerateError::io(root, err))? {
        let entry = entry.map_err(|err| GenerateError::io(root, err))?;
        let name = entry.file_name().map_err(|err| GenerateError::io(root, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| GenerateError::io(root.join(&name), err))?;
        if file_type.is_file() && keep(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Whether `name` is a generated file.
pub(crate) fn is_generated(name: &str) -> bool {
    name.ends_with(GENERATED_SUFFIX)
}

fn is_source(name: &str) -> bool {
    name.ends_with(".rs") && !is_generated(name)
}

/// Every marked struct in the `*.rs` files of `dir`, ordered by file name
/// and then by position in the file.
pub(crate) fn discover(dir: &Dir, root: &Utf8Path) -> Result<Vec<Target>, GenerateError> {
    let mut targets = Vec::new();
    for name in list_files(dir, root, is_source)? {
        let path = root.join(&name);
        let source = dir
            .read_to_string(&name)
            .map_err(|err| GenerateError::io(path.clone(), err))?;
        let file = syn::parse_file(&source).map_err(|err| parse_error(&path, &err))?;
        targets.extend(targets_in(&path, &name, file)?);
    }
    Ok(targets)
}

fn parse_error(path: &Utf8Path, err: &syn::Error) -> GenerateError {
    let start = err.span().start();
    GenerateError::Parse {
        path: path.to_path_buf(),
        line: start.line,
        column: start.column + 1,
        message: err.to_string(),
    }
}

/// Marked structs among the top-level items of one parsed file.
pub(crate) fn targets_in(
    path: &Utf8Path,
    file_name: &str,
    file: syn::File,
) -> Result<Vec<Target>, GenerateError> {
    let mut targets = Vec::new();
    for item in file.items {
        let Some((ident, attrs)) = declared_type(&item) else {
            continue;
        };
        let doc = marker::doc_text(attrs);
        let Some(token) = marker::find(&doc) else {
            continue;
        };
        let type_name = ident.to_string();

        let Item::Struct(item) = item else {
            return Err(GenerateError::MissingStruct {
                type_name,
                path: path.to_path_buf(),
            });
        };
        let kinds = marker::parse_kinds(token).map_err(|err| match err {
            MarkerError::Empty => GenerateError::EmptyMarker {
                type_name: type_name.clone(),
                path: path.to_path_buf(),
            },
            MarkerError::Unknown(kind) => GenerateError::UnknownKind {
                type_name: type_name.clone(),
                path: path.to_path_buf(),
                kind,
            },
        })?;
        if !item.generics.params.is_empty() {
            return Err(GenerateError::GenericType {
                type_name,
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path, type_name, ?kinds, "found marked struct");
        targets.push(Target {
            path: path.to_path_buf(),
            file_name: file_name.to_owned(),
            item,
            kinds,
        });
    }
    Ok(targets)
}

fn declared_type(item: &Item) -> Option<(&Ident, &[Attribute])> {
    match item {
        Item::Struct(item) => Some((&item.ident, &item.attrs)),
        Item::Enum(item) => Some((&item.ident, &item.attrs)),
        Item::Union(item) => Some((&item.ident, &item.attrs)),
        Item::Type(item) => Some((&item.ident, &item.attrs)),
        _ => None,
    }
}
