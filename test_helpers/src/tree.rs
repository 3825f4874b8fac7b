//! Scratch source directories.

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory of source files, deleted on drop.
#[derive(Debug)]
pub struct SourceTree {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl SourceTree {
    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create scratch dir")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("scratch dir is not UTF-8: {}", path.display()))?;
        Ok(Self { root, _dir: dir })
    }

    /// Creates a tree holding `files`, given as `(name, contents)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree or any file cannot be created.
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let tree = Self::new()?;
        for (name, contents) in files {
            tree.write(name, contents)?;
        }
        Ok(tree)
    }

    /// Root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `name`, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.root.join(name);
        fs::write(&path, contents).with_context(|| format!("write {path}"))
    }

    /// Reads `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        fs::read_to_string(&path).with_context(|| format!("read {path}"))
    }

    /// Whether `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    /// Names of the files in the tree, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn file_names(&self) -> Result<Vec<String>> {
        let mut names = self
            .root
            .read_dir_utf8()
            .with_context(|| format!("list {}", self.root))?
            .map(|entry| Ok(entry?.file_name().to_owned()))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
