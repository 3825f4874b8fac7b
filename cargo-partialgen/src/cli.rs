//! Command-line interface definitions for `cargo-partialgen`.

use std::ffi::OsString;

use camino::Utf8PathBuf;
use clap::Parser;

use crate::DEFAULT_CRATE_PATH;

const SUBCOMMAND: &str = "partialgen";

/// Parsed CLI arguments for `cargo-partialgen`.
#[derive(Debug, Parser)]
#[command(name = "cargo-partialgen", bin_name = "cargo partialgen")]
#[command(about = "Generate builders and matchers for structs marked `partial:`")]
#[command(version)]
pub struct Args {
    /// Directory containing the marked source files.
    #[arg(long, value_name = "path", default_value = ".")]
    pub dir: Utf8PathBuf,
    /// Path of the `partial` runtime crate in generated code.
    #[arg(
        long,
        value_name = "path",
        env = "PARTIALGEN_CRATE_PATH",
        default_value = DEFAULT_CRATE_PATH
    )]
    pub crate_path: String,
    /// Fail instead of writing when generated files are out of date.
    #[arg(long = "check")]
    pub should_check: bool,
}

impl Args {
    /// Parses `args`, accepting both `cargo partialgen` and direct
    /// invocation.
    pub fn parse_cargo<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(strip_subcommand(args))
    }
}

/// Drops the subcommand name cargo passes as the first argument.
pub fn strip_subcommand<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).is_some_and(|arg| arg == SUBCOMMAND) {
        args.remove(1);
    }
    args
}
