pub mod cli;
pub mod error;
pub mod filter;
pub mod io_utils;

use std::{env, path::Path, sync::OnceLock, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::cli::Cli;

/// Annotation list produced by the AffectNet download, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "../affectnet/Manually_Annotated_file_lists/training.csv";
/// Filtered copy written to the working directory, replacing any earlier run.
pub const DEFAULT_OUTPUT_PATH: &str = "training.csv";

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("affectnet_clean", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let _cli = Cli::parse();
    let start = Instant::now();
    let input = Path::new(DEFAULT_INPUT_PATH);
    let output = Path::new(DEFAULT_OUTPUT_PATH);
    let summary = filter::filter_file(input, output)
        .with_context(|| format!("Filtering {input:?} into {output:?}"))?;
    let elapsed = start.elapsed();
    info!(
        "Wrote {} row(s) to {:?} in {:.2?}",
        summary.rows_written, output, elapsed
    );
    println!("Time: {}", filter::elapsed_minutes(elapsed));
    Ok(())
}
