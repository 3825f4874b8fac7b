//! Builder and matcher generation for structs marked with `partial:`.
//!
//! The generator scans the `*.rs` files of one directory for top-level
//! structs whose doc comment carries a marker such as
//!
//! ```text
//! /// partial:builder,matcher
//! ```
//!
//! and writes a `<stem>.partialgen.rs` file next to each source file that
//! declares at least one of them. The source file pulls the generated code
//! in with `include!("<stem>.partialgen.rs");`.
//!
//! Generation is all or nothing: outputs are rendered in memory and only
//! written once every marked struct in the directory has been processed.
//! Files whose contents did not change are left alone, and generated files
//! that are no longer produced are removed.

pub mod cli;
pub mod error;

mod discover;
mod fields;
mod fs_helpers;
mod marker;
mod output;
mod render;
mod type_name;

use std::collections::BTreeMap;

use camino::Utf8Path;
use tracing::info;

pub use error::GenerateError;
pub use marker::Kind;
pub use output::GenerationReport;
pub use render::HEADER;
pub use type_name::TypeError;

use crate::cli::Args;
use crate::discover::Target;
use crate::output::Changes;

/// Suffix of generated files.
pub const GENERATED_SUFFIX: &str = ".partialgen.rs";

/// Runtime crate path used by generated code unless overridden.
pub const DEFAULT_CRATE_PATH: &str = "::partial";

/// Generation settings.
#[derive(Debug, Clone)]
pub struct Options {
    crate_path: syn::Path,
}

impl Options {
    /// Creates options referring to the runtime crate at `crate_path`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidCratePath`] when `crate_path` is not
    /// a Rust path.
    pub fn new(crate_path: &str) -> Result<Self, GenerateError> {
        let parsed = syn::parse_str(crate_path).map_err(|err| GenerateError::InvalidCratePath {
            path: crate_path.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Self {
            crate_path: parsed,
        })
    }

    /// Runtime crate path used in generated code.
    #[must_use]
    pub const fn crate_path(&self) -> &syn::Path {
        &self.crate_path
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            crate_path: syn::parse_quote!(::partial),
        }
    }
}

/// Name of the generated file for source file `name`.
#[must_use]
pub fn output_name(name: &str) -> String {
    let stem = name.strip_suffix(".rs").unwrap_or(name);
    format!("{stem}{GENERATED_SUFFIX}")
}

/// Renders every output for `root` without touching the disk.
///
/// Keys are generated file names within `root`; values are their contents.
///
/// # Errors
///
/// Returns the first error met while reading, parsing or rendering.
pub fn plan(root: &Utf8Path, options: &Options) -> Result<BTreeMap<String, String>, GenerateError> {
    let dir = fs_helpers::open_dir(root)?;
    plan_in(&dir, root, options)
}

fn plan_in(
    dir: &cap_std::fs_utf8::Dir,
    root: &Utf8Path,
    options: &Options,
) -> Result<BTreeMap<String, String>, GenerateError> {
    let targets = discover::discover(dir, root)?;
    info!(count = targets.len(), dir = %root, "found marked structs");

    let mut grouped: BTreeMap<String, Vec<&Target>> = BTreeMap::new();
    for target in &targets {
        grouped
            .entry(output_name(&target.file_name))
            .or_default()
            .push(target);
    }
    grouped
        .into_iter()
        .map(|(name, file_targets)| {
            let contents = render::render_file(&root.join(&name), &file_targets, options.crate_path())?;
            Ok((name, contents))
        })
        .collect()
}

/// Generates every output for `root` and brings the directory up to date.
///
/// # Errors
///
/// Returns the first error met. Nothing is written or removed unless every
/// output rendered successfully.
pub fn generate(root: &Utf8Path, options: &Options) -> Result<GenerationReport, GenerateError> {
    let dir = fs_helpers::open_dir(root)?;
    let outputs = plan_in(&dir, root, options)?;
    Changes::detect(&dir, root, &outputs)?.commit(&dir, root, &outputs)
}

/// Verifies that the generated files in `root` are current.
///
/// # Errors
///
/// Returns [`GenerateError::OutOfDate`] listing the files a run would write
/// or remove, or any error [`generate`] would return.
pub fn check(root: &Utf8Path, options: &Options) -> Result<(), GenerateError> {
    let dir = fs_helpers::open_dir(root)?;
    let outputs = plan_in(&dir, root, options)?;
    let paths = Changes::detect(&dir, root, &outputs)?.pending(root);
    if paths.is_empty() {
        Ok(())
    } else {
        Err(GenerateError::OutOfDate { paths })
    }
}

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns any error from [`check`] or [`generate`].
pub fn run(args: &Args) -> Result<(), GenerateError> {
    let options = Options::new(&args.crate_path)?;
    if args.should_check {
        check(&args.dir, &options)?;
        info!(dir = %args.dir, "generated files are up to date");
        return Ok(());
    }

    let report = generate(&args.dir, &options)?;
    info!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        removed = report.removed.len(),
        "generation complete"
    );
    Ok(())
}
