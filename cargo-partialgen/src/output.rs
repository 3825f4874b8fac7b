//! Comparing planned outputs with disk and committing them.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use tracing::{debug, info};

use crate::discover::{is_generated, list_files};
use crate::error::GenerateError;
use crate::fs_helpers::{read_optional, write_file};

/// Files touched by a generation run, by file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files created or rewritten.
    pub written: Vec<Utf8PathBuf>,
    /// Files whose contents were already current.
    pub unchanged: Vec<Utf8PathBuf>,
    /// Stale generated files deleted.
    pub removed: Vec<Utf8PathBuf>,
}

/// Differences between planned outputs and the directory contents.
#[derive(Debug, Default)]
pub(crate) struct Changes {
    write: Vec<String>,
    unchanged: Vec<String>,
    remove: Vec<String>,
}

impl Changes {
    /// Compares `outputs` with the generated files currently in `dir`.
    pub(crate) fn detect(
        dir: &Dir,
        root: &Utf8Path,
        outputs: &BTreeMap<String, String>,
    ) -> Result<Self, GenerateError> {
        let mut changes = Self::default();
        for (name, contents) in outputs {
            match read_optional(dir, root, name)? {
                Some(existing) if existing == *contents => changes.unchanged.push(name.clone()),
                _ => changes.write.push(name.clone()),
            }
        }
        changes.remove = list_files(dir, root, is_generated)?
            .into_iter()
            .filter(|name| !outputs.contains_key(name))
            .collect();
        Ok(changes)
    }

    /// Paths that a run would write or remove.
    pub(crate) fn pending(&self, root: &Utf8Path) -> Vec<Utf8PathBuf> {
        self.write
            .iter()
            .chain(&self.remove)
            .map(|name| root.join(name))
            .collect()
    }

    /// Writes changed outputs, then removes stale ones.
    pub(crate) fn commit(
        self,
        dir: &Dir,
        root: &Utf8Path,
        outputs: &BTreeMap<String, String>,
    ) -> Result<GenerationReport, GenerateError> {
        info!(count = self.write.len(), "writing generated files");
        for (name, contents) in outputs.iter().filter(|&(name, _)| self.write.contains(name)) {
            write_file(dir, root, name, contents)?;
            info!("=> {}", root.join(name));
        }
        for name in &self.unchanged {
            debug!("unchanged {}", root.join(name));
        }
        for name in &self.remove {
            dir.remove_file(name)
                .map_err(|err| GenerateError::io(root.join(name), err))?;
            info!("removed stale {}", root.join(name));
        }

        let paths = |names: Vec<String>| -> Vec<Utf8PathBuf> {
            names.into_iter().map(|name| root.join(name)).collect()
        };
        Ok(GenerationReport {
            written: paths(self.write),
            unchanged: paths(self.unchanged),
            removed: paths(self.remove),
        })
    }
}
