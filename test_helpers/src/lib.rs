//! Test helpers shared across crates in the workspace.
//!
//! - [`cwd`] serialises changes to the process working directory.
//! - [`env`] serialises changes to environment variables.
//! - [`tree`] builds scratch source directories for generator runs.

pub mod cwd;
pub mod env;
pub mod tree;
