//! CLI entrypoint for `cargo-partialgen`.

use cargo_partialgen::GenerateError;
use cargo_partialgen::cli::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GenerateError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    cargo_partialgen::run(&Args::parse_cargo(std::env::args_os()))
}
