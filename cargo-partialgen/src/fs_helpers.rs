//! Filesystem helpers shared across `cargo-partialgen` modules.

use std::io::Write;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::error::GenerateError;

/// Opens the directory to generate into.
pub(crate) fn open_dir(path: &Utf8Path) -> Result<Dir, GenerateError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| GenerateError::io(path, err))
}

/// Reads `name` from `dir`, returning `None` when it does not exist.
pub(crate) fn read_optional(
    dir: &Dir,
    root: &Utf8Path,
    name: &str,
) -> Result<Option<String>, GenerateError> {
    match dir.read_to_string(name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GenerateError::io(root.join(name), err)),
    }
}

/// Replaces the contents of `name` in `dir`.
pub(crate) fn write_file(
    dir: &Dir,
    root: &Utf8Path,
    name: &str,
    contents: &str,
) -> Result<(), GenerateError> {
    let mut file = dir
        .open_with(name, OpenOptions::new().write(true).create(true).truncate(true))
        .map_err(|err| GenerateError::io(root.join(name), err))?;
    file.write_all(contents.as_bytes())
        .map_err(|err| GenerateError::io(root.join(name), err))
}
