//! augmentor: write augmented copies of every image in a directory.
//!
//! Set RUST_LOG to change verbosity (default: info).

use std::path::PathBuf;

use anyhow::Context;
use augmentor_cli::{init_tracing, load_params_file, run_batch, BatchConfig, ParamOverrides};
use augmentor_core::AugmentParams;
use clap::Parser;

#[derive(Parser)]
#[command(name = "augmentor", about = "Batch image augmentation")]
struct Cli {
    /// Directory holding the source images (jpg, jpeg, png)
    #[arg(long)]
    input: PathBuf,
    /// Directory the augmented copies are written to (created if missing)
    #[arg(long)]
    output: PathBuf,
    /// Augmented copies per source image
    #[arg(long)]
    count: u32,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file with augmentation parameters; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: ParamOverrides,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => load_params_file(path)?,
        None => AugmentParams::default(),
    };

    let config = BatchConfig {
        input_dir: cli.input,
        output_dir: cli.output,
        count: cli.count,
        params: cli.overrides.apply(base),
        seed: cli.seed,
    };

    let report = run_batch(&config).context("Batch run failed")?;
    let out = serde_json::to_string_pretty(&report).context("Serialize report")?;
    println!("{}", out);
    Ok(())
}
